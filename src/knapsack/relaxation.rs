//! Linear relaxation of the 0/1 knapsack.

use super::types::{validate_items, whole_watts, LoadItem};
use crate::error::Result;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Optimum of the relaxed problem and its rounded selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxation {
    /// `x_i` in `[0, 1]`, parallel to the input items.
    pub fractions: Vec<f64>,
    /// `sum(utility_i * x_i)`: an upper bound on the 0/1 optimum.
    pub objective: f64,
    /// Each `x_i` rounded to the nearest integer, ties to even.
    pub rounded: Vec<bool>,
}

/// Solves `max sum(u_i x_i)` s.t. `sum(w_i x_i) <= C`, `0 <= x_i <= 1`.
///
/// With a single capacity row and box bounds the LP optimum is reached by
/// filling items in decreasing utility-per-watt order and taking a fraction
/// of the first item that no longer fits (Dantzig). Weights and capacity are
/// the same whole-watt values the exact solver uses, so the objective bounds
/// the DP optimum from above.
///
/// The rounded selection is informational: it may overshoot the capacity
/// and is never the authoritative bundle.
///
/// Returns `Ok(None)` when the relaxation has no finite optimum (the bound
/// is then reported as unavailable).
///
/// # Errors
///
/// [`DegenerateInput`](crate::Error::DegenerateInput) for a non-positive
/// capacity, [`InvalidInput`](crate::Error::InvalidInput) for malformed items.
pub fn solve_relaxation(items: &[LoadItem], capacity_w: f64) -> Result<Option<Relaxation>> {
    validate_items(items)?;
    let capacity = whole_watts(capacity_w)? as f64;

    // Items with no positive utility never enter an optimal LP solution.
    let mut order: Vec<usize> = (0..items.len())
        .filter(|&i| items[i].utility > 0.0)
        .collect();
    let density = |i: usize| items[i].utility / items[i].weight() as f64;
    order.sort_by(|&a, &b| {
        density(b)
            .partial_cmp(&density(a))
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut fractions = vec![0.0; items.len()];
    let mut remaining = capacity;
    for i in order {
        if remaining <= 0.0 {
            break;
        }
        let weight = items[i].weight() as f64;
        if weight <= remaining {
            fractions[i] = 1.0;
            remaining -= weight;
        } else {
            fractions[i] = remaining / weight;
            remaining = 0.0;
        }
    }

    let objective: f64 = items
        .iter()
        .zip(&fractions)
        .map(|(item, x)| item.utility * x)
        .sum();
    if !objective.is_finite() {
        warn!(objective, "linear relaxation has no finite optimum");
        return Ok(None);
    }

    let rounded = fractions.iter().map(|&x| x.round_ties_even() >= 1.0).collect();
    debug!(objective, "linear relaxation solved");
    Ok(Some(Relaxation {
        fractions,
        objective,
        rounded,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::knapsack::{solve_exact, OptimizerConfig};
    use proptest::prelude::*;

    fn items(table: &[(f64, f64)]) -> Vec<LoadItem> {
        table.iter()
            .enumerate()
            .map(|(i, &(u, p))| LoadItem::new(format!("d{i}"), u, p))
            .collect()
    }

    #[test]
    fn test_fractional_item() {
        // Densities: 0.1, 0.1, 0.0833...
        let items = items(&[(10.0, 100.0), (20.0, 200.0), (25.0, 300.0)]);
        let lp = solve_relaxation(&items, 400.0).unwrap().unwrap();
        assert_eq!(lp.fractions[0], 1.0);
        assert_eq!(lp.fractions[1], 1.0);
        assert!((lp.fractions[2] - 1.0 / 3.0).abs() < 1e-12);
        assert!((lp.objective - (30.0 + 25.0 / 3.0)).abs() < 1e-9);
        assert_eq!(lp.rounded, vec![true, true, false]);
    }

    #[test]
    fn test_rounding_up_can_overshoot() {
        let items = items(&[(9.0, 100.0), (10.0, 160.0)]);
        let lp = solve_relaxation(&items, 200.0).unwrap().unwrap();
        // 100 W whole, then 100 / 160 = 0.625 of the second, rounded to 1.
        assert_eq!(lp.rounded, vec![true, true]);
    }

    #[test]
    fn test_non_positive_utilities_stay_out() {
        let items = items(&[(0.0, 10.0), (-1.0, 10.0), (2.0, 10.0)]);
        let lp = solve_relaxation(&items, 100.0).unwrap().unwrap();
        assert_eq!(lp.fractions, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unbounded_objective_is_unavailable() {
        let items = items(&[(f64::MAX, 1.0), (f64::MAX, 1.0)]);
        assert_eq!(solve_relaxation(&items, 10.0), Ok(None));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let items = items(&[(1.0, 1.0)]);
        assert!(matches!(
            solve_relaxation(&items, 0.0),
            Err(Error::DegenerateInput(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_bound_dominates_exact(
            table in prop::collection::vec((0.0f64..100.0, 1.0f64..500.0), 0..=12),
            capacity in 1u64..2000,
        ) {
            let items = items(&table);
            let lp = solve_relaxation(&items, capacity as f64).unwrap().unwrap();
            let dp = solve_exact(&items, capacity as f64, &OptimizerConfig::default()).unwrap();
            prop_assert!(lp.objective >= dp.objective - 1e-9);

            let used: f64 = items
                .iter()
                .zip(&lp.fractions)
                .map(|(it, x)| it.weight() as f64 * x)
                .sum();
            prop_assert!(used <= capacity as f64 + 1e-9);
            prop_assert!(lp.fractions.iter().all(|x| (0.0..=1.0).contains(x)));
        }
    }
}
