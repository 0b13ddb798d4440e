//! Validated, ordered device catalog.

use super::types::{Device, DeviceId};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};

/// An ordered set of devices with unique identifiers.
///
/// Catalog order is the canonical order used by the pair scheduler, so the
/// same catalog always produces the same question sequence.
///
/// # Examples
///
/// ```
/// use u_loadpref::device::{Device, DeviceCatalog};
///
/// let catalog = DeviceCatalog::new(vec![
///     Device::new("Lamp", 672.0),
///     Device::new("Fridge", 1104.0),
/// ])
/// .unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.id_of("Fridge").map(|id| id.index()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    devices: Vec<Device>,
    index: HashMap<String, DeviceId>,
}

impl DeviceCatalog {
    /// Builds a catalog, rejecting empty or duplicate identifiers and
    /// power draws that are not finite and positive.
    pub fn new(devices: Vec<Device>) -> Result<Self> {
        let mut index = HashMap::with_capacity(devices.len());
        for (i, device) in devices.iter().enumerate() {
            if device.id.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "device at position {i} has an empty identifier"
                )));
            }
            if !device.power_w.is_finite() || device.power_w <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "device `{}` has non-positive power draw {}",
                    device.id, device.power_w
                )));
            }
            if index.insert(device.id.clone(), DeviceId(i)).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate device identifier `{}`",
                    device.id
                )));
            }
        }
        Ok(Self { devices, index })
    }

    /// The health-facility load table the survey is fielded with.
    pub fn reference() -> Self {
        let devices = vec![
            Device::new("Electric cooker", 8000.0),
            Device::new("Solar vaccine refrigerator", 1104.0),
            Device::new("Ultrasound scanner", 1158.0),
            Device::new("Oxygen concentrator", 1180.0),
            Device::new("Electric pots", 4000.0),
            Device::new("Gooseneck lamp", 672.0),
        ];
        let index = devices
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), DeviceId(i)))
            .collect();
        Self { devices, index }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns the device behind a handle.
    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.get(id.0)
    }

    /// Identifier of a device handle. Panics on a foreign handle.
    pub fn name(&self, id: DeviceId) -> &str {
        &self.devices[id.0].id
    }

    /// Looks up the handle for an identifier.
    pub fn id_of(&self, name: &str) -> Option<DeviceId> {
        self.index.get(name).copied()
    }

    /// Like [`id_of`](Self::id_of) but reports unknown names as errors.
    pub fn require(&self, name: &str) -> Result<DeviceId> {
        self.id_of(name)
            .ok_or_else(|| Error::UnknownDevice(name.to_string()))
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Identifiers in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.id.clone()).collect()
    }

    /// Device identifier to power draw.
    pub fn power_map(&self) -> BTreeMap<String, f64> {
        self.devices
            .iter()
            .map(|d| (d.id.clone(), d.power_w))
            .collect()
    }
}
