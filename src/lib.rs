//! Preference elicitation and power-budgeted load selection.
//!
//! Elicits how strongly respondents prefer each device in a fixed set, then
//! uses the resulting utilities to choose the device bundle that maximizes
//! total utility under a power budget.
//!
//! - **Pairwise comparison**: an incrementally built, transitively closed
//!   dominance relation that asks only the pairs it cannot deduce and yields
//!   a total ranking.
//! - **Utility scaling**: direct percentages or rank positions mapped to a
//!   common 0–100 scale, then filtered to installed devices and rescaled to
//!   `[0, 1]`.
//! - **Load selection**: exact 0/1 knapsack by dynamic programming, plus the
//!   linear relaxation as an upper bound and informational approximation.
//! - **Sensitivity**: the optimum recomputed across a sweep of capacities.
//!
//! # Architecture
//!
//! Every engine is a synchronous, CPU-bound computation. Survey state lives
//! in a per-respondent [`pairwise::PairwiseSession`]; the optimizer and the
//! sweep are pure functions of their inputs. Rendering, persistence and
//! charting belong to consumers.
//!
//! # Features
//!
//! - `serde` (default): serialization of records, bundles and sweep results.
//! - `parallel`: solve sweep steps concurrently with rayon.

pub mod device;
pub mod error;
pub mod knapsack;
pub mod pairwise;
pub mod sensitivity;
pub mod utility;

pub use error::{Error, Result};
