//! Runs both solvers on one input and reports the bundles side by side.

use super::config::OptimizerConfig;
use super::dp::solve_exact;
use super::relaxation::solve_relaxation;
use super::types::{load_items, Bundle, LoadItem, SelectionRow};
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// The rounded LP selection together with its fractional bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxedBundle {
    /// Rounded selection. Informational only.
    pub bundle: Bundle,
    /// Fractional LP objective, an upper bound on the exact optimum.
    pub bound: f64,
    /// Fractional `x_i`, parallel to the input items.
    pub fractions: Vec<f64>,
}

/// Outcome of one optimizer run.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimisation {
    /// Capacity the run was made for (W).
    pub capacity_w: f64,
    /// The authoritative, provably optimal bundle.
    pub dp_bundle: Bundle,
    /// The relaxation, or `None` when it was disabled or unavailable.
    pub lp: Option<RelaxedBundle>,
    /// Per-device report in input order.
    pub rows: Vec<SelectionRow>,
}

impl Optimisation {
    pub fn lp_bundle(&self) -> Option<&Bundle> {
        self.lp.as_ref().map(|lp| &lp.bundle)
    }

    pub fn lp_bound(&self) -> Option<f64> {
        self.lp.as_ref().map(|lp| lp.bound)
    }

    /// How far the exact optimum sits below the LP bound, as a fraction of
    /// the bound. `None` without a positive bound.
    pub fn optimality_gap(&self) -> Option<f64> {
        self.lp_bound()
            .filter(|&bound| bound > 0.0)
            .map(|bound| (bound - self.dp_bundle.total_utility) / bound)
    }
}

/// Load selection optimizer.
pub struct LoadOptimizer;

impl LoadOptimizer {
    /// Runs the exact solver and, if enabled, the LP relaxation.
    ///
    /// # Errors
    ///
    /// [`DegenerateInput`](crate::Error::DegenerateInput) when
    /// `capacity_w <= 0` or the DP table is too large;
    /// [`InvalidInput`](crate::Error::InvalidInput) for malformed items.
    pub fn run(
        items: &[LoadItem],
        capacity_w: f64,
        config: &OptimizerConfig,
    ) -> Result<Optimisation> {
        let exact = solve_exact(items, capacity_w, config)?;
        let dp_bundle = Bundle::from_selection(items, &exact.selected, capacity_w);

        let lp = if config.solve_relaxation {
            let relaxed = solve_relaxation(items, capacity_w)?;
            if relaxed.is_none() {
                warn!("LP bound unavailable, reporting the exact bundle only");
            }
            relaxed.map(|r| RelaxedBundle {
                bundle: Bundle::from_selection(items, &r.rounded, capacity_w),
                bound: r.objective,
                fractions: r.fractions,
            })
        } else {
            None
        };

        let lp_picks = lp.as_ref().map(|r| &r.fractions);
        let rows = items
            .iter()
            .enumerate()
            .map(|(i, item)| SelectionRow {
                device: item.device.clone(),
                utility: item.utility,
                power_w: item.power_w,
                utility_per_watt: item.utility_per_watt(),
                dp_pick: exact.selected[i],
                lp_pick: lp_picks.is_some_and(|x| x[i].round_ties_even() >= 1.0),
            })
            .collect();

        info!(
            capacity_w,
            devices = items.len(),
            dp_utility = dp_bundle.total_utility,
            dp_power_w = dp_bundle.total_power_w,
            lp_bound = lp.as_ref().map(|r| r.bound),
            "load selection optimised"
        );

        Ok(Optimisation {
            capacity_w,
            dp_bundle,
            lp,
            rows,
        })
    }
}

/// Optimises a utility map against a power map with default settings.
///
/// Only devices present in `utilities` are considered; each must have a
/// power entry.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_loadpref::knapsack::optimise;
///
/// let utilities = BTreeMap::from([
///     ("a".to_string(), 10.0),
///     ("b".to_string(), 20.0),
///     ("c".to_string(), 25.0),
/// ]);
/// let power = BTreeMap::from([
///     ("a".to_string(), 100.0),
///     ("b".to_string(), 200.0),
///     ("c".to_string(), 300.0),
/// ]);
/// let result = optimise(&utilities, &power, 300.0).unwrap();
/// assert_eq!(result.dp_bundle.devices, vec!["a", "b"]);
/// assert_eq!(result.dp_bundle.total_utility, 30.0);
/// ```
pub fn optimise(
    utilities: &BTreeMap<String, f64>,
    power: &BTreeMap<String, f64>,
    capacity_w: f64,
) -> Result<Optimisation> {
    optimise_with(utilities, power, capacity_w, &OptimizerConfig::default())
}

/// [`optimise`] with an explicit configuration.
pub fn optimise_with(
    utilities: &BTreeMap<String, f64>,
    power: &BTreeMap<String, f64>,
    capacity_w: f64,
    config: &OptimizerConfig,
) -> Result<Optimisation> {
    let items = load_items(utilities, power)?;
    LoadOptimizer::run(&items, capacity_w, config)
}
