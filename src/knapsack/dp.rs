//! Exact 0/1 knapsack by dynamic programming.

use super::config::OptimizerConfig;
use super::types::{validate_items, whole_watts, LoadItem};
use crate::error::{Error, Result};
use tracing::debug;

/// Provably optimal 0/1 selection for the integer-weight model.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactSolution {
    /// Selection mask parallel to the input items.
    pub selected: Vec<bool>,
    /// Best achievable total utility.
    pub objective: f64,
    /// Capacity in whole watts the table was built for.
    pub capacity_w: u64,
}

/// Solves the 0/1 knapsack exactly over whole-watt weights.
///
/// `dp[i][w]` is the best utility using the first `i` items within `w`
/// watts: `dp[i][w] = max(dp[i-1][w], dp[i-1][w - weight_i] + utility_i)`
/// when `weight_i <= w`, else `dp[i-1][w]`, with `dp[0][*] = 0`. The
/// selection is recovered by walking `i` from `n` down to 1 and taking item
/// `i` whenever `dp[i][w] != dp[i-1][w]`.
///
/// Weights and capacity are rounded to whole watts before solving, so the
/// raw power of the selection can exceed `capacity_w` by the accumulated
/// rounding; the bundle built from it then reports a negative `spare_w`.
///
/// # Errors
///
/// - [`Error::DegenerateInput`] when the capacity is not positive or the
///   table would exceed `config.max_table_cells`.
/// - [`Error::InvalidInput`] for malformed items.
pub fn solve_exact(
    items: &[LoadItem],
    capacity_w: f64,
    config: &OptimizerConfig,
) -> Result<ExactSolution> {
    config.validate().map_err(Error::InvalidConfig)?;
    validate_items(items)?;
    let capacity = whole_watts(capacity_w)?;

    let n = items.len();
    let width = usize::try_from(capacity)
        .ok()
        .and_then(|c| c.checked_add(1))
        .ok_or_else(|| Error::DegenerateInput(format!("capacity {capacity} W is too large")))?;
    let cells = (n + 1).checked_mul(width);
    if cells.is_none_or(|c| c > config.max_table_cells) {
        return Err(Error::DegenerateInput(format!(
            "{n} devices x {capacity} W exceeds the {} cell DP limit",
            config.max_table_cells
        )));
    }

    let weights: Vec<usize> = items.iter().map(|it| it.weight() as usize).collect();
    let mut dp = vec![0.0f64; (n + 1) * width];

    for i in 1..=n {
        let (weight, value) = (weights[i - 1], items[i - 1].utility);
        let (prev, row) = dp.split_at_mut(i * width);
        let prev = &prev[(i - 1) * width..];
        let row = &mut row[..width];
        for w in 0..width {
            row[w] = if weight <= w {
                prev[w].max(prev[w - weight] + value)
            } else {
                prev[w]
            };
        }
    }

    let mut selected = vec![false; n];
    let mut w = width - 1;
    for i in (1..=n).rev() {
        if dp[i * width + w] != dp[(i - 1) * width + w] {
            selected[i - 1] = true;
            w -= weights[i - 1];
        }
    }

    let objective = dp[n * width + width - 1];
    debug!(
        devices = n,
        capacity_w = capacity,
        chosen = selected.iter().filter(|&&s| s).count(),
        objective,
        "exact knapsack solved"
    );

    Ok(ExactSolution {
        selected,
        objective,
        capacity_w: capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(table: &[(f64, f64)]) -> Vec<LoadItem> {
        table.iter()
            .enumerate()
            .map(|(i, &(u, p))| LoadItem::new(format!("d{i}"), u, p))
            .collect()
    }

    /// Best utility over all 2^n subsets within capacity.
    fn brute_force(items: &[LoadItem], capacity: u64) -> f64 {
        let n = items.len();
        let mut best = 0.0f64;
        for mask in 0u32..(1 << n) {
            let (mut weight, mut value) = (0u64, 0.0f64);
            for (i, item) in items.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    weight += item.weight();
                    value += item.utility;
                }
            }
            if weight <= capacity {
                best = best.max(value);
            }
        }
        best
    }

    #[test]
    fn test_two_small_beat_one_large() {
        let items = items(&[(10.0, 100.0), (20.0, 200.0), (25.0, 300.0)]);
        let solution = solve_exact(&items, 300.0, &OptimizerConfig::default()).unwrap();
        assert_eq!(solution.selected, vec![true, true, false]);
        assert!((solution.objective - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_everything_too_heavy() {
        let items = items(&[(5.0, 500.0), (7.0, 900.0)]);
        let solution = solve_exact(&items, 300.0, &OptimizerConfig::default()).unwrap();
        assert_eq!(solution.selected, vec![false, false]);
        assert_eq!(solution.objective, 0.0);
    }

    #[test]
    fn test_no_items() {
        let solution = solve_exact(&[], 100.0, &OptimizerConfig::default()).unwrap();
        assert!(solution.selected.is_empty());
        assert_eq!(solution.objective, 0.0);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let items = items(&[(1.0, 10.0)]);
        assert!(matches!(
            solve_exact(&items, 0.0, &OptimizerConfig::default()),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_table_limit() {
        let items = items(&[(1.0, 10.0), (2.0, 20.0)]);
        let config = OptimizerConfig::default().with_max_table_cells(100);
        assert!(matches!(
            solve_exact(&items, 1000.0, &config),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_fractional_power_is_rounded() {
        // 149.6 W rounds to 150 W; both fit exactly in 300 W.
        let items = items(&[(1.0, 149.6), (1.0, 150.4)]);
        let solution = solve_exact(&items, 300.0, &OptimizerConfig::default()).unwrap();
        assert_eq!(solution.selected, vec![true, true]);
    }

    #[test]
    fn test_reference_facility() {
        // Six-device table, 3 kW budget.
        let items = items(&[
            (0.2, 8000.0),
            (1.0, 1104.0),
            (0.6, 1158.0),
            (0.8, 1180.0),
            (0.0, 4000.0),
            (0.4, 672.0),
        ]);
        let solution = solve_exact(&items, 3000.0, &OptimizerConfig::default()).unwrap();
        // Fridge + concentrator + lamp = 2956 W, utility 2.2.
        assert_eq!(
            solution.selected,
            vec![false, true, false, true, false, true]
        );
        assert!((solution.objective - 2.2).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            table in prop::collection::vec((0.0f64..100.0, 1.0f64..60.0), 0..=12),
            capacity in 1u64..200,
        ) {
            let items = items(&table);
            let solution =
                solve_exact(&items, capacity as f64, &OptimizerConfig::default()).unwrap();
            let best = brute_force(&items, capacity);
            prop_assert!((solution.objective - best).abs() < 1e-9);

            let chosen_weight: u64 = items
                .iter()
                .zip(&solution.selected)
                .filter(|(_, s)| **s)
                .map(|(it, _)| it.weight())
                .sum();
            let chosen_value: f64 = items
                .iter()
                .zip(&solution.selected)
                .filter(|(_, s)| **s)
                .map(|(it, _)| it.utility)
                .sum();
            prop_assert!(chosen_weight <= capacity);
            prop_assert!((chosen_value - solution.objective).abs() < 1e-9);
        }
    }
}
