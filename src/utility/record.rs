//! Respondent records as handed to the persistence layer.

use super::normalize::UtilityRecord;
use std::collections::BTreeMap;
use std::fmt;

/// Elicitation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Standard Gamble: direct percentage answers.
    #[cfg_attr(feature = "serde", serde(rename = "SG"))]
    StandardGamble,

    /// Pairwise Comparison: a ranking derived from a dominance relation.
    #[cfg_attr(feature = "serde", serde(rename = "PC"))]
    PairwiseComparison,
}

impl Method {
    /// Short code used in persisted records.
    pub fn code(self) -> &'static str {
        match self {
            Method::StandardGamble => "SG",
            Method::PairwiseComparison => "PC",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-method payload of a respondent record.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodBlock {
    pub utility: UtilityRecord,
}

/// One respondent's finalized utilities, one block per method.
///
/// Serialized shape:
///
/// ```text
/// { "id": "r-07", "Methods": { "PC": { "utility": { "Lamp": 100.0, ... } } } }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RespondentRecord {
    pub id: String,

    #[cfg_attr(feature = "serde", serde(rename = "Methods"))]
    pub methods: BTreeMap<Method, MethodBlock>,
}

impl RespondentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            methods: BTreeMap::new(),
        }
    }

    /// Attaches (or replaces) the utilities for one method.
    pub fn with_method(mut self, method: Method, utility: UtilityRecord) -> Self {
        self.methods.insert(method, MethodBlock { utility });
        self
    }

    /// Utilities recorded for `method`, if any.
    pub fn utility(&self, method: Method) -> Option<&UtilityRecord> {
        self.methods.get(&method).map(|block| &block.utility)
    }
}
