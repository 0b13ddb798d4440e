//! Device value types.

use std::fmt;

/// A powered device: unique identifier plus its power draw in watts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Device {
    /// Unique identifier (display name).
    pub id: String,
    /// Power draw in watts. Always finite and positive inside a catalog.
    pub power_w: f64,
}

impl Device {
    pub fn new(id: impl Into<String>, power_w: f64) -> Self {
        Self {
            id: id.into(),
            power_w,
        }
    }
}

/// Index of a device within its [`DeviceCatalog`](super::DeviceCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub usize);

impl DeviceId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
