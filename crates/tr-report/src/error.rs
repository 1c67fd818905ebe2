//! Error types for report generation.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur during report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing to the rendering sink failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The device directory could not be queried.
    #[error("device directory error: {0}")]
    DirectoryError(#[from] tr_common::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Message catalog could not be loaded.
    #[error("invalid message catalog: {0}")]
    InvalidCatalog(String),
}
