//! Error taxonomy shared by every engine in the crate.

use thiserror::Error;

/// Errors surfaced by the preference and load-selection engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A preference contradicts the already-closed dominance relation.
    ///
    /// Indicates a scheduler bug (a deducible pair was asked again) or
    /// inconsistent input fed past the scheduler. The relation is left
    /// unchanged.
    #[error("cannot record `{winner}` over `{loser}`: `{loser}` is already known to beat `{winner}`")]
    InvariantViolation { winner: String, loser: String },

    /// Input for which no meaningful result exists (e.g. capacity <= 0).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Malformed input rejected at the data-model boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A device name that is not part of the catalog or power map.
    #[error("unknown device `{0}`")]
    UnknownDevice(String),

    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Utilities were requested before every pair was resolved.
    #[error("survey incomplete: {remaining} pair(s) still undetermined")]
    IncompleteSurvey { remaining: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_message_names_both_devices() {
        let err = Error::InvariantViolation {
            winner: "Lamp".into(),
            loser: "Cooker".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("`Lamp`"));
        assert!(msg.contains("`Cooker`"));
    }

    #[test]
    fn test_incomplete_survey_message() {
        let err = Error::IncompleteSurvey { remaining: 3 };
        assert_eq!(
            err.to_string(),
            "survey incomplete: 3 pair(s) still undetermined"
        );
    }
}
