//! Pairwise Comparison (PC) elicitation.
//!
//! A respondent is shown two devices at a time and picks the more
//! important one. Each answer is folded into a [`DominanceRelation`] that is
//! kept transitively closed, so pairs implied by earlier answers are never
//! asked. The [`next_pair`] scheduler scans pairs in a fixed canonical order
//! and stops once every pair is settled; [`rank`] then reads a total order
//! off the relation.
//!
//! [`PairwiseSession`] bundles the relation and the set of asked pairs for
//! one respondent. It is the surface a survey front-end drives:
//!
//! ```text
//! loop { next_pair() -> record_choice(winner, loser) } -> ranking() -> utility_record()
//! ```
//!
//! # References
//!
//! - Thurstone (1927), "A Law of Comparative Judgment"
//! - Cormen et al., "Introduction to Algorithms", §22.4 (topological sort)

mod ranking;
mod relation;
mod scheduler;
mod session;

pub use ranking::rank;
pub use relation::{Contradiction, DominanceRelation};
pub use scheduler::{next_pair, CheckedPairs};
pub use session::{PairwiseSession, SessionProgress};
