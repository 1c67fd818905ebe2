//! Shared types for trackreport.
//!
//! This crate provides foundational types shared by the report layer:
//! - Device and user identity types
//! - Measurement units and map provider preferences
//! - Report descriptors and the device authorization predicate
//! - Common error types
//! - Application settings resolution and logging bootstrap

pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod model;
pub mod units;

pub use config::{ApplicationSettings, ConfigPaths, ConfigResolver, ConfigSource};
pub use error::{Error, ErrorCategory, Result};
pub use id::{DeviceId, UserId};
pub use model::{AccessPolicy, Device, Report, ReportType, User, UserSettings};
pub use units::{DistanceUnit, MapType, SpeedUnit};
