//! Settings resolution for trackreport.
//!
//! Implements deterministic resolution order:
//! 1. Explicit path supplied by the host application
//! 2. `TRACKREPORT_SETTINGS` environment variable
//! 3. `settings.json` in the configuration directory
//!    (explicit dir, `TRACKREPORT_CONFIG`, `XDG_CONFIG_HOME/trackreport`,
//!    platform config dir)
//! 4. Built-in defaults

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::{ApplicationSettings, ConfigResolution, ConfigSource};
use crate::error::{Error, Result};

const SETTINGS_FILE: &str = "settings.json";

/// Settings file locations supplied by the host application.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Directory containing settings.json
    pub config_dir: Option<PathBuf>,
    /// Explicit path to the settings file
    pub settings_path: Option<PathBuf>,
}

/// Settings resolver with deterministic resolution order.
#[derive(Debug)]
pub struct ConfigResolver {
    paths: ConfigPaths,
}

impl ConfigResolver {
    /// Create a new resolver with explicit paths.
    pub fn new(paths: ConfigPaths) -> Self {
        ConfigResolver { paths }
    }

    /// Create a resolver with no explicit overrides.
    pub fn with_defaults() -> Self {
        ConfigResolver {
            paths: ConfigPaths::default(),
        }
    }

    /// Resolve the configuration directory.
    pub fn resolve_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.paths.config_dir {
            return Some(dir.clone());
        }

        if let Ok(dir) = env::var("TRACKREPORT_CONFIG") {
            return Some(PathBuf::from(dir));
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("trackreport"));
        }

        dirs::config_dir().map(|d| d.join("trackreport"))
    }

    /// Resolve the settings file path.
    pub fn resolve_settings_path(&self) -> (Option<PathBuf>, ConfigResolution) {
        if let Some(ref path) = self.paths.settings_path {
            return (Some(path.clone()), ConfigResolution::Explicit);
        }

        if let Ok(path) = env::var("TRACKREPORT_SETTINGS") {
            return (Some(PathBuf::from(path)), ConfigResolution::EnvVar);
        }

        if let Some(config_dir) = self.resolve_config_dir() {
            let path = config_dir.join(SETTINGS_FILE);
            if path.exists() {
                return (Some(path), ConfigResolution::ConfigDir);
            }
        }

        (None, ConfigResolution::Default)
    }

    /// Load settings from the resolved path or defaults.
    pub fn load_settings(&self) -> Result<(ApplicationSettings, ConfigSource)> {
        let (path, resolution) = self.resolve_settings_path();

        match path {
            Some(p) => {
                let content = fs::read_to_string(&p).map_err(|e| {
                    Error::Config(format!("failed to read settings from {}: {}", p.display(), e))
                })?;

                let settings = ApplicationSettings::from_json(&content).map_err(|e| {
                    Error::InvalidSettings {
                        path: p.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;

                settings.validate()?;

                debug!(path = %p.display(), %resolution, "Loaded application settings");

                Ok((
                    settings,
                    ConfigSource {
                        path: Some(p.to_string_lossy().to_string()),
                        resolution,
                    },
                ))
            }
            None => {
                debug!("Using built-in application settings");
                Ok((
                    ApplicationSettings::default(),
                    ConfigSource {
                        path: None,
                        resolution: ConfigResolution::Default,
                    },
                ))
            }
        }
    }
}
