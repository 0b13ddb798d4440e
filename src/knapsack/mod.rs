//! Load Selection Optimizer.
//!
//! Chooses which devices to power under a capacity limit so that total
//! utility is maximal. Two solvers run on the same whole-watt model:
//!
//! - **Exact 0/1 knapsack** ([`solve_exact`]): dynamic programming over
//!   capacity, `O(n * capacity)` time and memory. Its bundle is the
//!   authoritative selection.
//! - **Linear relaxation** ([`solve_relaxation`]): the fractional optimum,
//!   an upper bound on the exact one. Rounding it gives a fast approximate
//!   bundle that is reported for comparison only.
//!
//! [`greedy_fill`] and [`cumulative_curve`] expose the utility-per-watt
//! ordering used for reporting and for the capacity sweep.
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems"

mod config;
mod dp;
mod greedy;
mod optimizer;
mod relaxation;
mod types;

pub use config::OptimizerConfig;
pub use dp::{solve_exact, ExactSolution};
pub use greedy::{cumulative_curve, density_order, greedy_fill, CumulativePoint};
pub use optimizer::{optimise, optimise_with, LoadOptimizer, Optimisation, RelaxedBundle};
pub use relaxation::{solve_relaxation, Relaxation};
pub use types::{load_items, Bundle, LoadItem, SelectionRow};
