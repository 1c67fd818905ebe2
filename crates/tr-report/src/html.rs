//! Streaming HTML implementation of [`RenderingSink`].
//!
//! Output uses Bootstrap 3 class names so reports look right when the
//! configured stylesheet is loaded, and stay readable without it.

use std::io::{self, Write};

use tr_common::Report;

use crate::sink::RenderingSink;
use crate::style::{CellStyle, TableStyle};

/// Stylesheet linked from generated documents by default.
pub const DEFAULT_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@3.4.1/dist/css/bootstrap.min.css";

/// Writes report markup straight into `W`.
pub struct HtmlSink<W: Write> {
    out: W,
    stylesheet: Option<String>,
}

impl<W: Write> HtmlSink<W> {
    /// Create a sink linking [`DEFAULT_STYLESHEET`].
    pub fn new(out: W) -> Self {
        Self {
            out,
            stylesheet: Some(DEFAULT_STYLESHEET.to_string()),
        }
    }

    /// Replace the linked stylesheet; `None` omits the link.
    pub fn with_stylesheet(mut self, stylesheet: Option<String>) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn raw(&mut self, markup: &str) -> io::Result<()> {
        self.out.write_all(markup.as_bytes())
    }

    fn element(&mut self, tag: &str, text: &str) -> io::Result<()> {
        write!(self.out, "<{tag}>{}</{tag}>", html_escape(text), tag = tag)
    }

    fn cell_start(&mut self, tag: &str, style: Option<CellStyle>) -> io::Result<()> {
        write!(self.out, "<{}", tag)?;
        if let Some(style) = style {
            if let Some(colspan) = style.colspan {
                write!(self.out, " colspan=\"{}\"", colspan)?;
            }
            if let Some(rowspan) = style.rowspan {
                write!(self.out, " rowspan=\"{}\"", rowspan)?;
            }
        }
        self.raw(">")
    }
}

impl<W: Write> RenderingSink for HtmlSink<W> {
    fn start(&mut self, report: &Report) -> io::Result<()> {
        let title = html_escape(&report.name);
        writeln!(self.out, "<!DOCTYPE html>")?;
        writeln!(self.out, "<html>")?;
        writeln!(self.out, "<head>")?;
        writeln!(self.out, "<meta charset=\"UTF-8\">")?;
        writeln!(
            self.out,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(self.out, "<title>{}</title>", title)?;
        if let Some(stylesheet) = self.stylesheet.clone() {
            writeln!(
                self.out,
                "<link rel=\"stylesheet\" href=\"{}\">",
                html_escape(&stylesheet)
            )?;
        }
        writeln!(self.out, "</head>")?;
        writeln!(self.out, "<body>")?;
        writeln!(self.out, "<div class=\"container\">")
    }

    fn end(&mut self, _report: &Report) -> io::Result<()> {
        writeln!(self.out, "</div>")?;
        writeln!(self.out, "</body>")?;
        writeln!(self.out, "</html>")?;
        self.out.flush()
    }

    fn h1(&mut self, text: &str) -> io::Result<()> {
        self.element("h1", text)
    }

    fn h2(&mut self, text: &str) -> io::Result<()> {
        self.element("h2", text)
    }

    fn h3(&mut self, text: &str) -> io::Result<()> {
        self.element("h3", text)
    }

    fn table_start(&mut self, style: Option<TableStyle>) -> io::Result<()> {
        let style = style.unwrap_or_default();
        let mut class = String::from("table");
        if style.hover {
            class.push_str(" table-hover");
        }
        if style.condensed {
            class.push_str(" table-condensed");
        }
        write!(self.out, "<table class=\"{}\">", class)
    }

    fn table_end(&mut self) -> io::Result<()> {
        self.raw("</table>")
    }

    fn table_head_start(&mut self) -> io::Result<()> {
        self.raw("<thead>")
    }

    fn table_head_end(&mut self) -> io::Result<()> {
        self.raw("</thead>")
    }

    fn table_head_cell_start(&mut self, style: Option<CellStyle>) -> io::Result<()> {
        self.cell_start("th", style)
    }

    fn table_head_cell_end(&mut self) -> io::Result<()> {
        self.raw("</th>")
    }

    fn table_body_start(&mut self) -> io::Result<()> {
        self.raw("<tbody>")
    }

    fn table_body_end(&mut self) -> io::Result<()> {
        self.raw("</tbody>")
    }

    fn table_row_start(&mut self) -> io::Result<()> {
        self.raw("<tr>")
    }

    fn table_row_end(&mut self) -> io::Result<()> {
        self.raw("</tr>")
    }

    fn table_cell_start(&mut self, style: Option<CellStyle>) -> io::Result<()> {
        self.cell_start("td", style)
    }

    fn table_cell_end(&mut self) -> io::Result<()> {
        self.raw("</td>")
    }

    fn paragraph_start(&mut self) -> io::Result<()> {
        self.raw("<p>")
    }

    fn paragraph_end(&mut self) -> io::Result<()> {
        self.raw("</p>")
    }

    fn panel_start(&mut self) -> io::Result<()> {
        self.raw("<div class=\"panel panel-default\">")
    }

    fn panel_end(&mut self) -> io::Result<()> {
        self.raw("</div>")
    }

    fn panel_heading_start(&mut self) -> io::Result<()> {
        self.raw("<div class=\"panel-heading\">")
    }

    fn panel_heading_end(&mut self) -> io::Result<()> {
        self.raw("</div>")
    }

    fn panel_body_start(&mut self) -> io::Result<()> {
        self.raw("<div class=\"panel-body\">")
    }

    fn panel_body_end(&mut self) -> io::Result<()> {
        self.raw("</div>")
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        self.raw(&html_escape(text))
    }

    fn bold(&mut self, text: &str) -> io::Result<()> {
        self.element("strong", text)
    }

    fn link(&mut self, url: &str, target: &str, label: &str) -> io::Result<()> {
        write!(
            self.out,
            "<a href=\"{}\" target=\"{}\">{}</a>",
            html_escape(url),
            html_escape(target),
            html_escape(label)
        )
    }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
