//! Utility-per-watt ordering, greedy fill and the cumulative curve.

use super::types::LoadItem;
use std::cmp::Ordering;

/// One step along the cumulative utility/power curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CumulativePoint {
    pub device: String,
    pub cumulative_power_w: f64,
    pub cumulative_utility: f64,
}

/// Item indices by decreasing utility per watt; equal densities keep
/// input order.
pub fn density_order(items: &[LoadItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .utility_per_watt()
            .partial_cmp(&items[a].utility_per_watt())
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Walks items in density order and takes each one that still fits.
///
/// Items that do not fit are skipped, not terminal: a lighter item further
/// down the order may still be taken.
pub fn greedy_fill(items: &[LoadItem], capacity_w: f64) -> Vec<bool> {
    let mut selected = vec![false; items.len()];
    let mut used = 0.0;
    for i in density_order(items) {
        if used + items[i].power_w <= capacity_w {
            used += items[i].power_w;
            selected[i] = true;
        }
    }
    selected
}

/// Running power and utility totals when every item is added in density
/// order.
pub fn cumulative_curve(items: &[LoadItem]) -> Vec<CumulativePoint> {
    let mut power = 0.0;
    let mut utility = 0.0;
    density_order(items)
        .into_iter()
        .map(|i| {
            power += items[i].power_w;
            utility += items[i].utility;
            CumulativePoint {
                device: items[i].device.clone(),
                cumulative_power_w: power,
                cumulative_utility: utility,
            }
        })
        .collect()
}
