//! The rendering sink contract.
//!
//! A sink accumulates the structured output of exactly one report. It is
//! started once, receives the structural calls issued by the report body in
//! order, and is ended once. Implementations may assume callers respect that
//! order; [`crate::session::ReportSession`] guarantees it.

use std::io;

use tr_common::Report;

use crate::style::{CellStyle, TableStyle};

/// Stateful, append-only target for report markup.
pub trait RenderingSink {
    /// Emit the document preamble for `report`.
    fn start(&mut self, report: &Report) -> io::Result<()>;
    /// Emit the closing markup and flush.
    fn end(&mut self, report: &Report) -> io::Result<()>;

    fn h1(&mut self, text: &str) -> io::Result<()>;
    fn h2(&mut self, text: &str) -> io::Result<()>;
    fn h3(&mut self, text: &str) -> io::Result<()>;

    fn table_start(&mut self, style: Option<TableStyle>) -> io::Result<()>;
    fn table_end(&mut self) -> io::Result<()>;
    fn table_head_start(&mut self) -> io::Result<()>;
    fn table_head_end(&mut self) -> io::Result<()>;
    fn table_head_cell_start(&mut self, style: Option<CellStyle>) -> io::Result<()>;
    fn table_head_cell_end(&mut self) -> io::Result<()>;
    fn table_body_start(&mut self) -> io::Result<()>;
    fn table_body_end(&mut self) -> io::Result<()>;
    fn table_row_start(&mut self) -> io::Result<()>;
    fn table_row_end(&mut self) -> io::Result<()>;
    fn table_cell_start(&mut self, style: Option<CellStyle>) -> io::Result<()>;
    fn table_cell_end(&mut self) -> io::Result<()>;

    fn paragraph_start(&mut self) -> io::Result<()>;
    fn paragraph_end(&mut self) -> io::Result<()>;

    fn panel_start(&mut self) -> io::Result<()>;
    fn panel_end(&mut self) -> io::Result<()>;
    fn panel_heading_start(&mut self) -> io::Result<()>;
    fn panel_heading_end(&mut self) -> io::Result<()>;
    fn panel_body_start(&mut self) -> io::Result<()>;
    fn panel_body_end(&mut self) -> io::Result<()>;

    /// Plain text; implementations escape it for their output format.
    fn text(&mut self, text: &str) -> io::Result<()>;
    /// Emphasized text.
    fn bold(&mut self, text: &str) -> io::Result<()>;
    /// Hyperlink opening in `target` (`_blank` for a new browsing context).
    fn link(&mut self, url: &str, target: &str, label: &str) -> io::Result<()>;
}
