//! Measurement units and map provider preferences.
//!
//! Telemetry is stored in fixed base units: speed in knots, distance in
//! kilometres. Display units carry the factor that converts from the base
//! unit. Each speed unit implies exactly one distance unit, so there is no
//! separate distance preference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance display unit. Raw distances are kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceUnit {
    Kilometer,
    Mile,
    NauticalMile,
}

impl DistanceUnit {
    /// Display symbol appended to formatted values.
    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Mile => "mi",
            DistanceUnit::NauticalMile => "nmi",
        }
    }

    /// Multiplier converting kilometres into this unit.
    pub fn factor(&self) -> f64 {
        match self {
            DistanceUnit::Kilometer => 1.0,
            DistanceUnit::Mile => 0.621371192,
            DistanceUnit::NauticalMile => 0.539956803,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Speed display unit. Raw speeds are knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpeedUnit {
    Knots,
    #[default]
    KilometersPerHour,
    MilesPerHour,
}

impl SpeedUnit {
    /// All selectable speed units.
    pub const ALL: [SpeedUnit; 3] = [
        SpeedUnit::Knots,
        SpeedUnit::KilometersPerHour,
        SpeedUnit::MilesPerHour,
    ];

    /// Display symbol appended to formatted values.
    pub fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::Knots => "kn",
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MilesPerHour => "mph",
        }
    }

    /// Multiplier converting knots into this unit.
    pub fn factor(&self) -> f64 {
        match self {
            SpeedUnit::Knots => 1.0,
            SpeedUnit::KilometersPerHour => 1.852,
            SpeedUnit::MilesPerHour => 1.150779,
        }
    }

    /// Distance unit paired with this speed unit.
    pub fn distance_unit(&self) -> DistanceUnit {
        match self {
            SpeedUnit::Knots => DistanceUnit::NauticalMile,
            SpeedUnit::KilometersPerHour => DistanceUnit::Kilometer,
            SpeedUnit::MilesPerHour => DistanceUnit::Mile,
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Map provider a user prefers for map views and generated links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    #[default]
    Osm,
    GoogleHybrid,
    GoogleNormal,
    GoogleSatellite,
    GoogleTerrain,
    BingRoad,
    BingHybrid,
    BingAerial,
    MapquestRoad,
    MapquestAerial,
    StamenToner,
    /// Provider value this build does not know about.
    #[serde(other)]
    Unknown,
}

impl MapType {
    /// Whether this provider belongs to the Google Maps family.
    pub fn is_google(&self) -> bool {
        matches!(
            self,
            MapType::GoogleHybrid
                | MapType::GoogleNormal
                | MapType::GoogleSatellite
                | MapType::GoogleTerrain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_unit_distance_pairing() {
        assert_eq!(SpeedUnit::Knots.distance_unit(), DistanceUnit::NauticalMile);
        assert_eq!(
            SpeedUnit::KilometersPerHour.distance_unit(),
            DistanceUnit::Kilometer
        );
        assert_eq!(SpeedUnit::MilesPerHour.distance_unit(), DistanceUnit::Mile);
    }

    #[test]
    fn test_every_speed_unit_has_distinct_distance_unit() {
        let mut symbols: Vec<_> = SpeedUnit::ALL
            .iter()
            .map(|u| u.distance_unit().symbol())
            .collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), SpeedUnit::ALL.len());
    }

    #[test]
    fn test_speed_unit_serde_names() {
        let json = serde_json::to_string(&SpeedUnit::KilometersPerHour).unwrap();
        assert_eq!(json, "\"kilometersPerHour\"");
    }

    #[test]
    fn test_map_type_google_family() {
        assert!(MapType::GoogleHybrid.is_google());
        assert!(MapType::GoogleTerrain.is_google());
        assert!(!MapType::Osm.is_google());
        assert!(!MapType::BingAerial.is_google());
        assert!(!MapType::Unknown.is_google());
    }

    #[test]
    fn test_unknown_map_type_deserializes() {
        let map: MapType = serde_json::from_str("\"HERE_TRAFFIC\"").unwrap();
        assert_eq!(map, MapType::Unknown);
        let map: MapType = serde_json::from_str("\"GOOGLE_SATELLITE\"").unwrap();
        assert_eq!(map, MapType::GoogleSatellite);
    }
}
