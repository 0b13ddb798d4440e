//! Capacity sweep execution.

use super::config::SweepConfig;
use crate::error::{Error, Result};
use crate::knapsack::{greedy_fill, solve_exact, LoadItem, OptimizerConfig};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Best utilities at one capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    pub capacity_w: f64,

    /// Exact optimum at this capacity.
    pub dp_utility: f64,
    pub dp_power_w: f64,

    /// Greedy utility-per-watt fill at this capacity.
    pub greedy_utility: f64,
    pub greedy_power_w: f64,

    /// Devices entering the exact bundle for the first time in the sweep.
    pub dp_added: Vec<String>,

    /// Devices entering the greedy selection for the first time.
    pub greedy_added: Vec<String>,
}

/// Result of a capacity sweep.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    /// One point per swept capacity, in increasing capacity order.
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Smallest swept capacity at which `device` is in the exact bundle.
    pub fn first_dp_entry(&self, device: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.dp_added.iter().any(|d| d == device))
            .map(|p| p.capacity_w)
    }

    /// Smallest swept capacity at which `device` is picked greedily.
    pub fn first_greedy_entry(&self, device: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.greedy_added.iter().any(|d| d == device))
            .map(|p| p.capacity_w)
    }

    /// `(capacity, exact utility)` pairs.
    pub fn dp_curve(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.capacity_w, p.dp_utility))
            .collect()
    }

    /// `(capacity, greedy utility)` pairs.
    pub fn greedy_curve(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.capacity_w, p.greedy_utility))
            .collect()
    }
}

/// Selections at one capacity, before first-entry labelling.
struct StepSelection {
    capacity_w: f64,
    dp: Vec<bool>,
    greedy: Vec<bool>,
}

/// Recomputes the optimizer across a range of capacities.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Runs the sweep.
    ///
    /// Every capacity step is an independent pure computation; with the
    /// `parallel` feature and `config.parallel` set, steps are solved
    /// concurrently. First-entry labels are assigned afterwards in capacity
    /// order, so the result does not depend on scheduling.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] for an invalid sweep range, and any error the
    /// exact solver reports for a step.
    pub fn run(
        items: &[LoadItem],
        config: &SweepConfig,
        optimizer: &OptimizerConfig,
    ) -> Result<SweepResult> {
        config.validate().map_err(Error::InvalidConfig)?;
        let capacities = config.capacities();

        let steps = solve_steps(items, &capacities, optimizer, config.parallel)?;

        let mut seen_dp: HashSet<usize> = HashSet::new();
        let mut seen_greedy: HashSet<usize> = HashSet::new();
        let points: Vec<SweepPoint> = steps
            .into_iter()
            .map(|step| {
                let point = SweepPoint {
                    capacity_w: step.capacity_w,
                    dp_utility: total(items, &step.dp, |it| it.utility),
                    dp_power_w: total(items, &step.dp, |it| it.power_w),
                    greedy_utility: total(items, &step.greedy, |it| it.utility),
                    greedy_power_w: total(items, &step.greedy, |it| it.power_w),
                    dp_added: newly_added(items, &step.dp, &mut seen_dp),
                    greedy_added: newly_added(items, &step.greedy, &mut seen_greedy),
                };
                trace!(
                    capacity_w = point.capacity_w,
                    dp_utility = point.dp_utility,
                    greedy_utility = point.greedy_utility,
                    "sweep step"
                );
                point
            })
            .collect();

        debug!(steps = points.len(), devices = items.len(), "capacity sweep finished");
        Ok(SweepResult { points })
    }
}

fn solve_steps(
    items: &[LoadItem],
    capacities: &[f64],
    optimizer: &OptimizerConfig,
    parallel: bool,
) -> Result<Vec<StepSelection>> {
    // Without the feature the flag is accepted and ignored.
    if parallel && cfg!(feature = "parallel") {
        #[cfg(feature = "parallel")]
        return capacities
            .par_iter()
            .map(|&c| solve_step(items, c, optimizer))
            .collect();
    }

    capacities
        .iter()
        .map(|&c| solve_step(items, c, optimizer))
        .collect()
}

fn solve_step(
    items: &[LoadItem],
    capacity_w: f64,
    optimizer: &OptimizerConfig,
) -> Result<StepSelection> {
    let exact = solve_exact(items, capacity_w, optimizer)?;
    Ok(StepSelection {
        capacity_w,
        dp: exact.selected,
        greedy: greedy_fill(items, capacity_w),
    })
}

fn total(items: &[LoadItem], selected: &[bool], value: impl Fn(&LoadItem) -> f64) -> f64 {
    items
        .iter()
        .zip(selected)
        .filter(|(_, chosen)| **chosen)
        .map(|(item, _)| value(item))
        .sum()
}

fn newly_added(items: &[LoadItem], selected: &[bool], seen: &mut HashSet<usize>) -> Vec<String> {
    selected
        .iter()
        .enumerate()
        .filter(|(i, chosen)| **chosen && seen.insert(*i))
        .map(|(i, _)| items[i].device.clone())
        .collect()
}
