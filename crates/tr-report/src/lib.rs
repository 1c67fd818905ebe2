//! HTML report generation core for vehicle tracking telemetry.
//!
//! Report types plug in as [`ReportBody`] implementations; this crate owns
//! everything around them: the document lifecycle, the rendering surface,
//! unit conversion and number formatting, map links, localized labels and
//! device authorization.
//!
//! # Features
//!
//! - **Streaming output**: [`HtmlSink`] writes markup directly to any `io::Write`
//! - **Guaranteed closing**: a started document is always ended, even on error or panic
//! - **User units**: speeds and distances follow the viewer's preferred unit
//! - **Map links**: Google Maps or OpenStreetMap, per user preference
//! - **Localized labels**: bundled message catalogs with locale fallback
//!
//! # Example
//!
//! ```no_run
//! use tr_common::{Report, ReportType, User};
//! use tr_report::{
//!     HtmlSink, InMemoryDirectory, ReportBody, ReportContext, ReportSession, Result,
//!     StaticCatalog,
//! };
//!
//! struct Summary;
//!
//! impl ReportBody for Summary {
//!     fn generate(&self, session: &mut ReportSession<'_>, report: &Report) -> Result<()> {
//!         session.h1(&report.name)?;
//!         for device in session.devices(report)? {
//!             session.h2(&device.name)?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let user = User::new(1, "admin").with_admin(true);
//! let catalog = StaticCatalog::bundled()?;
//! let directory = InMemoryDirectory::new(Vec::new(), user.clone());
//! let ctx = ReportContext::new(&user, &catalog, &directory);
//!
//! let now = chrono::Utc::now();
//! let report = Report::new(1, "Fleet", ReportType::GeneralInformation, now, now);
//! let mut sink = HtmlSink::new(std::io::stdout());
//! ReportSession::new(ctx, &mut sink).generate(&report, &Summary)?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod devices;
pub mod error;
pub mod format;
pub mod geo;
pub mod html;
pub mod i18n;
pub mod number;
pub mod session;
pub mod sink;
pub mod style;

pub use context::ReportContext;
pub use devices::{resolve_devices, DeviceDirectory, InMemoryDirectory};
pub use error::{ReportError, Result};
pub use format::{UnitFormatter, DATE_FORMAT};
pub use geo::{GeoLinkBuilder, MapLink, MAP_LINK_TARGET};
pub use html::{html_escape, HtmlSink, DEFAULT_STYLESHEET};
pub use i18n::{resolve_locale, MessageCatalog, StaticCatalog, FALLBACK_LOCALE, LOCALE_PARAM};
pub use number::{NumberFormat, NumberSymbols};
pub use session::{ReportBody, ReportSession, SessionState};
pub use sink::RenderingSink;
pub use style::{CellStyle, TableStyle};
