//! Optimizer input and output types.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// One candidate device: its utility and power draw.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadItem {
    pub device: String,
    pub utility: f64,
    pub power_w: f64,
}

impl LoadItem {
    pub fn new(device: impl Into<String>, utility: f64, power_w: f64) -> Self {
        Self {
            device: device.into(),
            utility,
            power_w,
        }
    }

    /// Integer weight used by the solvers: power rounded to whole watts
    /// (ties to even), never below one.
    pub fn weight(&self) -> u64 {
        (self.power_w.round_ties_even() as u64).max(1)
    }

    /// Utility per watt of the unrounded power draw.
    pub fn utility_per_watt(&self) -> f64 {
        self.utility / self.power_w
    }
}

/// Joins a utility map with a power map, in utility-map key order.
///
/// # Errors
///
/// [`Error::UnknownDevice`] when a device has no power entry, and
/// [`Error::InvalidInput`] for non-finite utilities or non-positive power.
pub fn load_items(
    utilities: &BTreeMap<String, f64>,
    power: &BTreeMap<String, f64>,
) -> Result<Vec<LoadItem>> {
    let items: Vec<LoadItem> = utilities
        .iter()
        .map(|(device, &utility)| {
            power
                .get(device)
                .map(|&power_w| LoadItem::new(device.clone(), utility, power_w))
                .ok_or_else(|| Error::UnknownDevice(device.clone()))
        })
        .collect::<Result<_>>()?;
    validate_items(&items)?;
    Ok(items)
}

pub(crate) fn validate_items(items: &[LoadItem]) -> Result<()> {
    for item in items {
        if !item.utility.is_finite() {
            return Err(Error::InvalidInput(format!(
                "utility for `{}` is not finite",
                item.device
            )));
        }
        if !item.power_w.is_finite() || item.power_w <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "power for `{}` must be positive, got {}",
                item.device, item.power_w
            )));
        }
    }
    Ok(())
}

/// Capacity rounded to whole watts, ties to even, so a 300.5 W budget
/// becomes 300 W.
///
/// # Errors
///
/// [`Error::DegenerateInput`] when the capacity is not finite, not positive,
/// or rounds to zero: no meaningful bundle exists.
pub(crate) fn whole_watts(capacity_w: f64) -> Result<u64> {
    if !capacity_w.is_finite() || capacity_w <= 0.0 {
        return Err(Error::DegenerateInput(format!(
            "capacity must be positive, got {capacity_w} W"
        )));
    }
    let rounded = capacity_w.round_ties_even();
    if rounded < 1.0 {
        return Err(Error::DegenerateInput(format!(
            "capacity {capacity_w} W rounds to zero whole watts"
        )));
    }
    Ok(rounded as u64)
}

/// A selected set of devices with its totals.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    /// Selected devices, in input order.
    pub devices: Vec<String>,
    /// Sum of the selected power draws (W).
    pub total_power_w: f64,
    /// Sum of the selected utilities.
    pub total_utility: f64,
    /// `capacity - total_power_w`; negative if the bundle overshoots.
    ///
    /// Both solvers work on per-item rounded watts, so the exact bundle can
    /// overshoot too: three 100.4 W devices fit a 301 W table and draw
    /// 301.2 W. Only the rounded LP bundle can overshoot by more than the
    /// accumulated rounding.
    pub spare_w: f64,
}

impl Bundle {
    /// Builds a bundle from a selection mask parallel to `items`.
    pub fn from_selection(items: &[LoadItem], selected: &[bool], capacity_w: f64) -> Self {
        let mut bundle = Bundle::default();
        for (item, &chosen) in items.iter().zip(selected) {
            if !chosen {
                continue;
            }
            bundle.devices.push(item.device.clone());
            bundle.total_power_w += item.power_w;
            bundle.total_utility += item.utility;
        }
        bundle.spare_w = capacity_w - bundle.total_power_w;
        bundle
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn contains(&self, device: &str) -> bool {
        self.devices.iter().any(|d| d == device)
    }

    /// Whether the bundle fits the capacity it was built for.
    pub fn fits(&self) -> bool {
        self.spare_w >= 0.0
    }
}

/// Per-device line of the selection report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionRow {
    pub device: String,
    pub utility: f64,
    pub power_w: f64,
    pub utility_per_watt: f64,
    /// Chosen by the exact solver.
    pub dp_pick: bool,
    /// Chosen by the rounded relaxation (false when it is unavailable).
    pub lp_pick: bool,
}
