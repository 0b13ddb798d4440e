//! Utility scaling and respondent records.
//!
//! Two elicitation methods produce different raw answers:
//!
//! - **Standard Gamble (SG)** answers are already percentages and pass
//!   through unchanged.
//! - **Pairwise Comparison (PC)** produces a total ranking, mapped linearly
//!   onto `[floor, top]` (by default rank 1 → 100.0, rank n → 0.1).
//!
//! Both land on a common 0–100 scale as a [`UtilityRecord`]. Before
//! optimisation, utilities are restricted to the devices installed at the
//! facility and rescaled to `[0, 1]` ([`rescale`]).
//!
//! Across respondents the only aggregation is the arithmetic mean
//! ([`mean_utilities`]); the remaining helpers report how often each device
//! is a respondent's first choice and how the per-method orderings compare.

mod aggregate;
mod config;
mod normalize;
mod record;
mod rescale;

pub use aggregate::{
    mean_rank_order, mean_utilities, method_winner, top_choice_counts, UtilitySource,
};
pub use config::ScaleConfig;
pub use normalize::{normalise, normalise_direct, normalise_rank, MethodAnswer, UtilityRecord};
pub use record::{Method, MethodBlock, RespondentRecord};
pub use rescale::{filter_available, rescale};
