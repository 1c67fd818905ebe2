//! Application-wide settings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::units::{MapType, SpeedUnit};

/// Highest zoom level accepted by the supported map providers.
pub const MAX_ZOOM_LEVEL: u8 = 19;

/// Settings shared by every request served by one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    /// Locale used when a request does not name one.
    #[serde(default = "default_language")]
    pub language: String,
    /// Map provider for users without stored preferences.
    #[serde(default)]
    pub default_map_type: MapType,
    /// Zoom level for users without stored preferences.
    #[serde(default = "default_zoom_level")]
    pub default_zoom_level: u8,
    /// Speed unit for users without stored preferences.
    #[serde(default)]
    pub default_speed_unit: SpeedUnit,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_zoom_level() -> u8 {
    1
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            default_map_type: MapType::default(),
            default_zoom_level: default_zoom_level(),
            default_speed_unit: SpeedUnit::default(),
        }
    }
}

impl ApplicationSettings {
    /// Set the fallback language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Check the settings for values no request could work with.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(Error::Config("language must not be empty".to_string()));
        }
        if self.default_zoom_level > MAX_ZOOM_LEVEL {
            return Err(Error::Config(format!(
                "default_zoom_level {} exceeds maximum {}",
                self.default_zoom_level, MAX_ZOOM_LEVEL
            )));
        }
        Ok(())
    }

    /// Load settings from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ApplicationSettings::default();
        assert_eq!(settings.language, "en");
        assert_eq!(settings.default_zoom_level, 1);
        assert_eq!(settings.default_map_type, MapType::Osm);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = ApplicationSettings::from_json(r#"{"language": "de"}"#).unwrap();
        assert_eq!(settings.language, "de");
        assert_eq!(settings.default_speed_unit, SpeedUnit::KilometersPerHour);
    }

    #[test]
    fn test_validate_rejects_empty_language() {
        let settings = ApplicationSettings::default().with_language("  ");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zoom_out_of_range() {
        let settings = ApplicationSettings {
            default_zoom_level: 25,
            ..ApplicationSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_serialization() {
        let settings = ApplicationSettings::default().with_language("ru");
        let json = settings.to_json().unwrap();
        let parsed = ApplicationSettings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
