//! Error types for trackreport.
//!
//! Errors carry a stable numeric code and a category so that the request
//! pipeline embedding the report layer can map them onto responses without
//! matching on message text:
//! - 10-19: configuration errors
//! - 20-29: device directory errors
//! - 60-69: I/O and serialization errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trackreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Application settings errors.
    Config,
    /// Device lookup and persistence errors.
    Directory,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Directory => write!(f, "directory"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for trackreport.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid settings file {path}: {reason}")]
    InvalidSettings { path: String, reason: String },

    // Directory errors (20-29)
    #[error("device lookup failed: {0}")]
    DeviceLookup(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidSettings { .. } => 11,
            Error::DeviceLookup(_) => 20,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidSettings { .. } => ErrorCategory::Config,
            Error::DeviceLookup(_) => ErrorCategory::Directory,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether retrying the request could succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Settings must be fixed by an operator first
            Error::Config(_) | Error::InvalidSettings { .. } => false,
            Error::DeviceLookup(_) => true,
            Error::Io(_) => true,
            Error::Json(_) => false,
        }
    }
}
