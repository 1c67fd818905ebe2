//! Unit- and locale-aware display formatting of telemetry values.
//!
//! Raw values come from storage in fixed base units (milliseconds, knots,
//! kilometres). The formatter converts them into the units selected in the
//! requesting user's settings and renders them with the separators of the
//! request locale. None of these operations fail: NaN is treated as zero.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use tr_common::UserSettings;

use crate::i18n::MessageCatalog;
use crate::number::{NumberFormat, NumberSymbols};

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Pattern used by [`UnitFormatter::format_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats durations, speeds, distances and dates for one request.
#[derive(Clone, Copy)]
pub struct UnitFormatter<'a> {
    settings: &'a UserSettings,
    messages: &'a dyn MessageCatalog,
    locale: &'a str,
}

impl<'a> UnitFormatter<'a> {
    pub fn new(settings: &'a UserSettings, messages: &'a dyn MessageCatalog, locale: &'a str) -> Self {
        Self {
            settings,
            messages,
            locale,
        }
    }

    /// Render a duration as `1d 2h 3min 4s ` using localized abbreviations.
    ///
    /// Components are floor-divided, zero components are omitted and each
    /// present component is followed by a space. Zero yields `0s`.
    pub fn format_duration(&self, duration_ms: u64) -> String {
        if duration_ms == 0 {
            return "0s".to_string();
        }

        let days = duration_ms / MILLIS_PER_DAY;
        let rest = duration_ms % MILLIS_PER_DAY;
        let hours = rest / MILLIS_PER_HOUR;
        let rest = rest % MILLIS_PER_HOUR;
        let minutes = rest / MILLIS_PER_MINUTE;
        let rest = rest % MILLIS_PER_MINUTE;
        let seconds = rest / MILLIS_PER_SECOND;

        let mut out = String::new();
        for (value, key) in [
            (days, "day"),
            (hours, "hour"),
            (minutes, "minute"),
            (seconds, "second"),
        ] {
            if value != 0 {
                out.push_str(&value.to_string());
                out.push_str(&self.messages.message(self.locale, key));
                out.push(' ');
            }
        }
        out
    }

    /// Render a speed given in knots in the user's speed unit.
    pub fn format_speed(&self, speed: f64) -> String {
        let unit = self.settings.speed_unit;
        let format = self.number_format().with_min_integer_digits(0);
        format!(
            "{} {}",
            format.format(zero_if_nan(speed) * unit.factor()),
            unit.symbol()
        )
    }

    /// Render a distance given in kilometres in the distance unit paired with
    /// the user's speed unit.
    pub fn format_distance(&self, distance: f64) -> String {
        let unit = self.settings.speed_unit.distance_unit();
        let format = self.number_format().with_min_integer_digits(1);
        format!(
            "{} {}",
            format.format(zero_if_nan(distance) * unit.factor()),
            unit.symbol()
        )
    }

    /// Render a timestamp as `yyyy-MM-dd HH:mm:ss` in its own time zone.
    pub fn format_date<Tz>(&self, date: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        date.format(DATE_FORMAT).to_string()
    }

    fn number_format(&self) -> NumberFormat {
        NumberFormat::new(NumberSymbols::for_locale(self.locale)).with_max_fraction_digits(2)
    }
}

fn zero_if_nan(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
