//! Tracking domain entities consumed by report generation.
//!
//! All of these are owned by the persistence/session layer and are only read
//! while a report is generated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::ApplicationSettings;
use crate::id::{DeviceId, UserId};
use crate::units::{MapType, SpeedUnit};

/// Per-user display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Speed display unit; also selects the distance unit.
    #[serde(default)]
    pub speed_unit: SpeedUnit,
    /// Preferred map provider.
    #[serde(default)]
    pub map_type: MapType,
    /// Default map zoom level.
    #[serde(default = "default_zoom_level")]
    pub zoom_level: u8,
    /// Default map centre latitude.
    #[serde(default)]
    pub center_latitude: f64,
    /// Default map centre longitude.
    #[serde(default)]
    pub center_longitude: f64,
    /// Preferred time zone. Stored only; report dates are not shifted.
    #[serde(default)]
    pub time_zone_id: Option<String>,
}

fn default_zoom_level() -> u8 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            speed_unit: SpeedUnit::default(),
            map_type: MapType::default(),
            zoom_level: default_zoom_level(),
            center_latitude: 0.0,
            center_longitude: 0.0,
            time_zone_id: None,
        }
    }
}

impl UserSettings {
    /// Settings for a user without stored preferences.
    pub fn default_for(app: &ApplicationSettings) -> Self {
        Self {
            speed_unit: app.default_speed_unit,
            map_type: app.default_map_type,
            zoom_level: app.default_zoom_level,
            ..Self::default()
        }
    }

    /// Set the speed unit.
    pub fn with_speed_unit(mut self, unit: SpeedUnit) -> Self {
        self.speed_unit = unit;
        self
    }

    /// Set the map provider.
    pub fn with_map_type(mut self, map_type: MapType) -> Self {
        self.map_type = map_type;
        self
    }

    /// Set the default zoom level.
    pub fn with_zoom_level(mut self, zoom_level: u8) -> Self {
        self.zoom_level = zoom_level;
        self
    }
}

/// A trackable asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Primary key.
    pub id: DeviceId,
    /// Hardware identifier reported by the tracker (IMEI or similar).
    pub unique_id: String,
    /// Display name.
    pub name: String,
    /// Owning user, if any.
    #[serde(default)]
    pub owner: Option<UserId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub plate_number: Option<String>,
    #[serde(default)]
    pub vehicle_info: Option<String>,
}

impl Device {
    /// Create a device with the mandatory fields.
    pub fn new(id: i64, unique_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: DeviceId(id),
            unique_id: unique_id.into(),
            name: name.into(),
            owner: None,
            description: None,
            phone: None,
            plate_number: None,
            vehicle_info: None,
        }
    }

    /// Set the owning user.
    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// Authorization predicate deciding whether a principal may see a device.
pub trait AccessPolicy {
    /// Returns true when the device is visible to this principal.
    fn can_access(&self, device: &Device) -> bool;
}

/// The requesting principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub login: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub manager: bool,
    /// Devices explicitly shared with this user.
    #[serde(default)]
    pub devices: BTreeSet<DeviceId>,
    /// Users administered by this user when `manager` is set.
    #[serde(default)]
    pub managed_users: BTreeSet<UserId>,
    #[serde(default)]
    pub settings: UserSettings,
}

impl User {
    /// Create a regular user with default settings.
    pub fn new(id: i64, login: impl Into<String>) -> Self {
        Self {
            id: UserId(id),
            login: login.into(),
            admin: false,
            manager: false,
            devices: BTreeSet::new(),
            managed_users: BTreeSet::new(),
            settings: UserSettings::default(),
        }
    }

    /// Grant or revoke administrator rights.
    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Make this user a manager of the given users.
    pub fn managing<I>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = UserId>,
    {
        self.manager = true;
        self.managed_users.extend(users);
        self
    }

    /// Share a device with this user.
    pub fn with_device(mut self, device: DeviceId) -> Self {
        self.devices.insert(device);
        self
    }

    /// Replace the display preferences.
    pub fn with_settings(mut self, settings: UserSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl AccessPolicy for User {
    fn can_access(&self, device: &Device) -> bool {
        if self.admin {
            return true;
        }
        if device.owner == Some(self.id) || self.devices.contains(&device.id) {
            return true;
        }
        self.manager
            && device
                .owner
                .map(|owner| self.managed_users.contains(&owner))
                .unwrap_or(false)
    }
}

/// Kind of report to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    GeneralInformation,
    DrivesAndStops,
    Overspeeds,
    GeofenceInOut,
    Events,
    MileageDetail,
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::GeneralInformation => write!(f, "general_information"),
            ReportType::DrivesAndStops => write!(f, "drives_and_stops"),
            ReportType::Overspeeds => write!(f, "overspeeds"),
            ReportType::GeofenceInOut => write!(f, "geofence_in_out"),
            ReportType::Events => write!(f, "events"),
            ReportType::MileageDetail => write!(f, "mileage_detail"),
        }
    }
}

/// Caller-supplied description of the report to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub name: String,
    pub report_type: ReportType,
    /// Explicitly selected devices; empty means every visible device.
    #[serde(default)]
    pub devices: Vec<DeviceId>,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    #[serde(default)]
    pub include_map: bool,
    #[serde(default)]
    pub disable_filter: bool,
}

impl Report {
    /// Create a report descriptor covering every visible device.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        report_type: ReportType,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            report_type,
            devices: Vec::new(),
            from_date,
            to_date,
            include_map: false,
            disable_filter: false,
        }
    }

    /// Restrict the report to the given devices, in order.
    pub fn with_devices<I>(mut self, devices: I) -> Self
    where
        I: IntoIterator<Item = DeviceId>,
    {
        self.devices = devices.into_iter().collect();
        self
    }

    /// Time range covered by the report.
    pub fn period(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.from_date, self.to_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: i64, owner: Option<i64>) -> Device {
        let device = Device::new(id, format!("imei-{}", id), format!("Truck {}", id));
        match owner {
            Some(owner) => device.with_owner(UserId(owner)),
            None => device,
        }
    }

    #[test]
    fn test_owner_can_access_device() {
        let user = User::new(1, "alice");
        assert!(user.can_access(&device(10, Some(1))));
        assert!(!user.can_access(&device(11, Some(2))));
    }

    #[test]
    fn test_shared_device_is_accessible() {
        let user = User::new(1, "alice").with_device(DeviceId(11));
        assert!(user.can_access(&device(11, Some(2))));
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = User::new(1, "root").with_admin(true);
        assert!(admin.can_access(&device(99, None)));
    }

    #[test]
    fn test_manager_sees_managed_users_devices() {
        let manager = User::new(1, "boss").managing([UserId(2)]);
        assert!(manager.can_access(&device(20, Some(2))));
        assert!(!manager.can_access(&device(30, Some(3))));
        assert!(!manager.can_access(&device(40, None)));
    }

    #[test]
    fn test_user_settings_default_for_application() {
        let app = ApplicationSettings {
            default_speed_unit: SpeedUnit::MilesPerHour,
            default_map_type: MapType::GoogleNormal,
            default_zoom_level: 7,
            ..ApplicationSettings::default()
        };
        let settings = UserSettings::default_for(&app);
        assert_eq!(settings.speed_unit, SpeedUnit::MilesPerHour);
        assert_eq!(settings.map_type, MapType::GoogleNormal);
        assert_eq!(settings.zoom_level, 7);
    }

    #[test]
    fn test_report_deserializes_with_defaults() {
        let json = r#"{
            "id": 5,
            "name": "Weekly",
            "report_type": "DRIVES_AND_STOPS",
            "from_date": "2026-01-01T00:00:00Z",
            "to_date": "2026-01-08T00:00:00Z"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert!(report.devices.is_empty());
        assert_eq!(report.report_type, ReportType::DrivesAndStops);
        assert!(!report.include_map);
    }
}
