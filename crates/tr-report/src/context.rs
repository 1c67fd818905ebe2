//! Per-request report context.

use tr_common::{Device, Report, User};

use crate::devices::{resolve_devices, DeviceDirectory};
use crate::error::Result;
use crate::format::UnitFormatter;
use crate::geo::GeoLinkBuilder;
use crate::i18n::{MessageCatalog, FALLBACK_LOCALE};

/// Everything a report needs to know about the request it serves.
///
/// Built once per request and borrowed by the session, the formatter, the
/// link builder and the device resolver.
#[derive(Clone, Copy)]
pub struct ReportContext<'a> {
    user: &'a User,
    messages: &'a dyn MessageCatalog,
    directory: &'a dyn DeviceDirectory,
    locale: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Context using [`FALLBACK_LOCALE`].
    pub fn new(
        user: &'a User,
        messages: &'a dyn MessageCatalog,
        directory: &'a dyn DeviceDirectory,
    ) -> Self {
        Self {
            user,
            messages,
            directory,
            locale: FALLBACK_LOCALE,
        }
    }

    /// Use `locale` for messages and number formatting.
    pub fn with_locale(mut self, locale: &'a str) -> Self {
        self.locale = locale;
        self
    }

    pub fn user(&self) -> &'a User {
        self.user
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }

    pub fn formatter(&self) -> UnitFormatter<'a> {
        UnitFormatter::new(&self.user.settings, self.messages, self.locale)
    }

    pub fn map_links(&self) -> GeoLinkBuilder<'a> {
        GeoLinkBuilder::new(&self.user.settings)
    }

    /// Localized text for `key`.
    pub fn message(&self, key: &str) -> String {
        self.messages.message(self.locale, key)
    }

    /// Devices `report` may include for the current user.
    pub fn resolve_devices(&self, report: &Report) -> Result<Vec<Device>> {
        resolve_devices(report, self.user, self.directory)
    }
}
