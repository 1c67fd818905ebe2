//! Application settings for trackreport.
//!
//! This module provides:
//! - Typed application-wide settings (default language, unit and map defaults)
//! - Deterministic settings resolution (explicit path > env > XDG > defaults)
//! - Semantic validation of loaded settings

pub mod resolve;
pub mod settings;

pub use resolve::{ConfigPaths, ConfigResolver};
pub use settings::ApplicationSettings;

/// Where the active settings were loaded from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the settings file, or None if using defaults
    pub path: Option<String>,
    /// How this source was resolved
    pub resolution: ConfigResolution,
}

/// How a settings file was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigResolution {
    /// From an explicitly supplied path
    Explicit,
    /// From environment variable
    EnvVar,
    /// From the configuration directory
    ConfigDir,
    /// Using built-in defaults
    Default,
}

impl std::fmt::Display for ConfigResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigResolution::Explicit => write!(f, "explicit"),
            ConfigResolution::EnvVar => write!(f, "env"),
            ConfigResolution::ConfigDir => write!(f, "config_dir"),
            ConfigResolution::Default => write!(f, "default"),
        }
    }
}
