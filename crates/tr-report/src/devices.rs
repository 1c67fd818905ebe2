//! Authorization-filtered device resolution.

use tr_common::{AccessPolicy, Device, DeviceId, Report, User};
use tracing::{debug, info};

use crate::error::Result;

/// Persistence-side view of devices for the current request.
pub trait DeviceDirectory {
    /// Every device visible in the current session, in natural order.
    fn visible_devices(&self) -> tr_common::Result<Vec<Device>>;
    /// Look up a device by primary key regardless of visibility.
    fn find_device(&self, id: DeviceId) -> tr_common::Result<Option<Device>>;
}

/// Devices a report may include for `user`.
///
/// Without an explicit selection this is the directory's visible set, as is.
/// With one, each referenced device is looked up and kept only if `user` may
/// access it; references that cannot be found, fail to load or are not
/// authorized are dropped silently. Order follows the report's selection.
pub fn resolve_devices(
    report: &Report,
    user: &dyn AccessPolicy,
    directory: &dyn DeviceDirectory,
) -> Result<Vec<Device>> {
    if report.devices.is_empty() {
        let devices = directory.visible_devices()?;
        debug!(
            report_id = report.id,
            resolved = devices.len(),
            "Resolved all visible devices"
        );
        return Ok(devices);
    }

    let mut devices = Vec::with_capacity(report.devices.len());
    for &id in &report.devices {
        match directory.find_device(id) {
            Ok(Some(device)) if user.can_access(&device) => devices.push(device),
            Ok(Some(_)) => debug!(device_id = %id, "Dropping device the user cannot access"),
            Ok(None) => debug!(device_id = %id, "Dropping unknown device"),
            Err(err) => debug!(device_id = %id, error = %err, "Dropping device that failed to load"),
        }
    }

    let dropped = report.devices.len() - devices.len();
    if dropped > 0 {
        info!(
            report_id = report.id,
            requested = report.devices.len(),
            resolved = devices.len(),
            dropped,
            "Explicit device selection filtered"
        );
    }

    Ok(devices)
}

/// Directory over an in-memory device list, scoped to one viewer.
///
/// `visible_devices` applies the viewer's access rights itself, which is what
/// a session-scoped persistence query does.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    devices: Vec<Device>,
    viewer: User,
}

impl InMemoryDirectory {
    pub fn new(devices: Vec<Device>, viewer: User) -> Self {
        Self { devices, viewer }
    }

    /// Load the device list from a JSON array.
    pub fn from_json(json: &str, viewer: User) -> Result<Self> {
        let devices: Vec<Device> = serde_json::from_str(json)?;
        Ok(Self::new(devices, viewer))
    }
}

impl DeviceDirectory for InMemoryDirectory {
    fn visible_devices(&self) -> tr_common::Result<Vec<Device>> {
        Ok(self
            .devices
            .iter()
            .filter(|device| self.viewer.can_access(device))
            .cloned()
            .collect())
    }

    fn find_device(&self, id: DeviceId) -> tr_common::Result<Option<Device>> {
        Ok(self.devices.iter().find(|device| device.id == id).cloned())
    }
}
