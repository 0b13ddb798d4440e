//! Device reference data.
//!
//! Devices are immutable, shared read-only by every respondent session and
//! every optimizer run. Inside the engines a device is addressed by a small
//! integer handle ([`DeviceId`]) into a [`DeviceCatalog`], so relations over
//! devices are plain index sets with no back-pointers.
//!
//! Malformed reference data (duplicate identifiers, non-positive power) is
//! rejected here, before it can reach any engine.

mod catalog;
mod types;

pub use catalog::DeviceCatalog;
pub use types::{Device, DeviceId};
