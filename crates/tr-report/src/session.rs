//! Lifecycle of a single report generation.
//!
//! A [`ReportSession`] binds one rendering sink to one report. Driving it with
//! [`ReportSession::generate`] starts the sink, hands the session to the
//! report-specific [`ReportBody`], and ends the sink again on every exit path:
//! when the body returns, when it fails, and when it panics.
//!
//! ```text
//! NotStarted --start--> InProgress --end--> Ended
//! ```

use chrono::{DateTime, TimeZone};
use tr_common::{Device, Report};
use tracing::{info, warn};

use crate::context::ReportContext;
use crate::error::Result;
use crate::format::UnitFormatter;
use crate::geo::MAP_LINK_TARGET;
use crate::sink::RenderingSink;
use crate::style::{CellStyle, TableStyle};

/// Report-type specific content generation.
pub trait ReportBody {
    /// Emit the body of `report` through `session`.
    fn generate(&self, session: &mut ReportSession<'_>, report: &Report) -> Result<()>;
}

/// Lifecycle state of a [`ReportSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Ended,
}

/// One report generation bound to one rendering sink.
pub struct ReportSession<'a> {
    ctx: ReportContext<'a>,
    sink: &'a mut dyn RenderingSink,
    state: SessionState,
    report: Option<&'a Report>,
}

impl<'a> ReportSession<'a> {
    pub fn new(ctx: ReportContext<'a>, sink: &'a mut dyn RenderingSink) -> Self {
        Self {
            ctx,
            sink,
            state: SessionState::NotStarted,
            report: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn context(&self) -> &ReportContext<'a> {
        &self.ctx
    }

    /// Generate `report` with `body`.
    ///
    /// The sink is ended exactly once even if starting it or the body fails.
    /// A body error takes precedence over an error ending the sink.
    pub fn generate(mut self, report: &'a Report, body: &dyn ReportBody) -> Result<()> {
        let outcome = match self.start(report) {
            Ok(()) => body.generate(&mut self, report),
            Err(err) => Err(err),
        };
        let ended = self.end();

        match &outcome {
            Ok(()) if ended.is_ok() => info!(report_id = report.id, "Report generated"),
            _ => warn!(report_id = report.id, "Report generation failed"),
        }

        outcome.and(ended)
    }

    fn start(&mut self, report: &'a Report) -> Result<()> {
        assert_eq!(
            self.state,
            SessionState::NotStarted,
            "report session started twice"
        );
        self.report = Some(report);
        self.state = SessionState::InProgress;
        info!(
            report_id = report.id,
            report_type = %report.report_type,
            locale = self.ctx.locale(),
            "Report generation started"
        );
        self.sink.start(report)?;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        assert_eq!(
            self.state,
            SessionState::InProgress,
            "report session ended while not in progress"
        );
        self.state = SessionState::Ended;
        if let Some(report) = self.report {
            self.sink.end(report)?;
        }
        Ok(())
    }

    fn sink(&mut self) -> &mut dyn RenderingSink {
        assert_eq!(
            self.state,
            SessionState::InProgress,
            "structural output outside an active report session"
        );
        &mut *self.sink
    }

    // Structure

    pub fn h1(&mut self, text: &str) -> Result<()> {
        Ok(self.sink().h1(text)?)
    }

    pub fn h2(&mut self, text: &str) -> Result<()> {
        Ok(self.sink().h2(text)?)
    }

    pub fn h3(&mut self, text: &str) -> Result<()> {
        Ok(self.sink().h3(text)?)
    }

    pub fn table_start(&mut self, style: Option<TableStyle>) -> Result<()> {
        Ok(self.sink().table_start(style)?)
    }

    pub fn table_end(&mut self) -> Result<()> {
        Ok(self.sink().table_end()?)
    }

    pub fn table_head_start(&mut self) -> Result<()> {
        Ok(self.sink().table_head_start()?)
    }

    pub fn table_head_end(&mut self) -> Result<()> {
        Ok(self.sink().table_head_end()?)
    }

    pub fn table_head_cell_start(&mut self, style: Option<CellStyle>) -> Result<()> {
        Ok(self.sink().table_head_cell_start(style)?)
    }

    pub fn table_head_cell_end(&mut self) -> Result<()> {
        Ok(self.sink().table_head_cell_end()?)
    }

    pub fn table_body_start(&mut self) -> Result<()> {
        Ok(self.sink().table_body_start()?)
    }

    pub fn table_body_end(&mut self) -> Result<()> {
        Ok(self.sink().table_body_end()?)
    }

    pub fn table_row_start(&mut self) -> Result<()> {
        Ok(self.sink().table_row_start()?)
    }

    pub fn table_row_end(&mut self) -> Result<()> {
        Ok(self.sink().table_row_end()?)
    }

    pub fn table_cell_start(&mut self, style: Option<CellStyle>) -> Result<()> {
        Ok(self.sink().table_cell_start(style)?)
    }

    pub fn table_cell_end(&mut self) -> Result<()> {
        Ok(self.sink().table_cell_end()?)
    }

    /// Unstyled cell containing `text`.
    pub fn table_cell(&mut self, text: &str) -> Result<()> {
        let sink = self.sink();
        sink.table_cell_start(None)?;
        sink.text(text)?;
        sink.table_cell_end()?;
        Ok(())
    }

    pub fn paragraph_start(&mut self) -> Result<()> {
        Ok(self.sink().paragraph_start()?)
    }

    pub fn paragraph_end(&mut self) -> Result<()> {
        Ok(self.sink().paragraph_end()?)
    }

    pub fn panel_start(&mut self) -> Result<()> {
        Ok(self.sink().panel_start()?)
    }

    pub fn panel_end(&mut self) -> Result<()> {
        Ok(self.sink().panel_end()?)
    }

    pub fn panel_heading_start(&mut self) -> Result<()> {
        Ok(self.sink().panel_heading_start()?)
    }

    pub fn panel_heading_end(&mut self) -> Result<()> {
        Ok(self.sink().panel_heading_end()?)
    }

    pub fn panel_body_start(&mut self) -> Result<()> {
        Ok(self.sink().panel_body_start()?)
    }

    pub fn panel_body_end(&mut self) -> Result<()> {
        Ok(self.sink().panel_body_end()?)
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        Ok(self.sink().text(text)?)
    }

    pub fn bold(&mut self, text: &str) -> Result<()> {
        Ok(self.sink().bold(text)?)
    }

    pub fn link(&mut self, url: &str, target: &str, label: &str) -> Result<()> {
        Ok(self.sink().link(url, target, label)?)
    }

    /// Link to the user's map provider centred on the coordinates.
    pub fn map_link(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        let link = self.ctx.map_links().build(latitude, longitude);
        Ok(self.sink().link(&link.url, MAP_LINK_TARGET, &link.label)?)
    }

    // Data helpers

    pub fn formatter(&self) -> UnitFormatter<'a> {
        self.ctx.formatter()
    }

    pub fn format_duration(&self, duration_ms: u64) -> String {
        self.formatter().format_duration(duration_ms)
    }

    pub fn format_speed(&self, speed: f64) -> String {
        self.formatter().format_speed(speed)
    }

    pub fn format_distance(&self, distance: f64) -> String {
        self.formatter().format_distance(distance)
    }

    pub fn format_date<Tz>(&self, date: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.formatter().format_date(date)
    }

    pub fn message(&self, key: &str) -> String {
        self.ctx.message(key)
    }

    /// Devices `report` may include for the current user.
    pub fn devices(&self, report: &Report) -> Result<Vec<Device>> {
        self.ctx.resolve_devices(report)
    }
}

impl Drop for ReportSession<'_> {
    fn drop(&mut self) {
        if self.state != SessionState::InProgress {
            return;
        }
        // Only reachable while unwinding out of a report body.
        self.state = SessionState::Ended;
        if let Some(report) = self.report {
            if let Err(err) = self.sink.end(report) {
                warn!(report_id = report.id, error = %err, "Failed to end report after panic");
            }
        }
    }
}
