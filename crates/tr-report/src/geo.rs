//! Links to external map services for a coordinate pair.

use tr_common::UserSettings;

use crate::number::{NumberFormat, NumberSymbols};

/// Browsing context map links open in.
pub const MAP_LINK_TARGET: &str = "_blank";

/// A rendered map hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink {
    pub url: String,
    pub label: String,
}

impl MapLink {
    /// Browsing context the link should open in.
    pub fn target(&self) -> &'static str {
        MAP_LINK_TARGET
    }
}

/// Builds map links according to the user's preferred map provider.
#[derive(Debug, Clone, Copy)]
pub struct GeoLinkBuilder<'a> {
    settings: &'a UserSettings,
}

impl<'a> GeoLinkBuilder<'a> {
    pub fn new(settings: &'a UserSettings) -> Self {
        Self { settings }
    }

    /// Link and label for `latitude`/`longitude`.
    ///
    /// Coordinates always use `.` as the decimal mark so the URL stays
    /// parseable whatever the request locale is.
    pub fn build(&self, latitude: f64, longitude: f64) -> MapLink {
        let coordinate = NumberFormat::new(NumberSymbols::POSIX)
            .with_max_fraction_digits(6)
            .with_min_integer_digits(0)
            .with_grouping(false);
        let lat = coordinate.format(latitude);
        let lon = coordinate.format(longitude);

        let label = format!("{} \u{00B0}, {} \u{00B0}", lat, lon);

        let url = if self.settings.map_type.is_google() {
            format!("https://maps.google.com/maps?q={},{}&t=m", lat, lon)
        } else {
            format!(
                "http://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
                lat = lat,
                lon = lon,
                zoom = self.settings.zoom_level
            )
        };

        MapLink { url, label }
    }
}
