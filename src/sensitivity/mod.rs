//! Capacity sensitivity analysis.
//!
//! Re-solves the load selection across a sweep of capacities to show how
//! the best achievable utility grows with the power budget, and at which
//! capacity each device first enters the selection. Both the exact optimum
//! and the greedy utility-per-watt fill are tracked.

mod config;
mod runner;

pub use config::SweepConfig;
pub use runner::{SensitivityAnalyzer, SweepPoint, SweepResult};
