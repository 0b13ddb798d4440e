//! Availability filter and 0–1 rescaling ahead of optimisation.

use std::collections::{BTreeMap, BTreeSet};

/// Keeps only the devices installed at the facility.
pub fn filter_available(
    utilities: &BTreeMap<String, f64>,
    available: &BTreeSet<String>,
) -> BTreeMap<String, f64> {
    utilities
        .iter()
        .filter(|(device, _)| available.contains(*device))
        .map(|(device, &u)| (device.clone(), u))
        .collect()
}

/// Filters to `available` devices and rescales linearly so the maximum
/// becomes 1.0 and the minimum 0.0.
///
/// When every remaining utility is identical, all of them become 1.0: the
/// respondent could not tell the devices apart, so they are treated as
/// equally essential. An empty selection stays empty.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use u_loadpref::utility::rescale;
///
/// let utilities = BTreeMap::from([
///     ("Lamp".to_string(), 20.0),
///     ("Fridge".to_string(), 80.0),
///     ("Cooker".to_string(), 50.0),
/// ]);
/// let available = BTreeSet::from(["Lamp".to_string(), "Fridge".to_string()]);
/// let scaled = rescale(&utilities, &available);
/// assert_eq!(scaled.len(), 2);
/// assert_eq!(scaled["Fridge"], 1.0);
/// assert_eq!(scaled["Lamp"], 0.0);
/// ```
pub fn rescale(
    utilities: &BTreeMap<String, f64>,
    available: &BTreeSet<String>,
) -> BTreeMap<String, f64> {
    let mut kept = filter_available(utilities, available);
    if kept.is_empty() {
        return kept;
    }

    let min = kept.values().copied().fold(f64::INFINITY, f64::min);
    let max = kept.values().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        kept.values_mut().for_each(|u| *u = 1.0);
    } else {
        let span = max - min;
        kept.values_mut().for_each(|u| *u = (*u - min) / span);
    }
    kept
}
