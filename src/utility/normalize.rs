//! Method-specific answers to a common 0–100 utility scale.

use super::config::ScaleConfig;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashSet};

/// Device → utility for one respondent and one method.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UtilityRecord(BTreeMap<String, f64>);

impl UtilityRecord {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, device: &str) -> Option<f64> {
        self.0.get(device).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.0
    }

    /// Device with the highest utility; ties go to the first identifier
    /// in lexical order.
    pub fn top_device(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (device, utility) in self.iter() {
            if best.is_none_or(|(_, u)| utility > u) {
                best = Some((device, utility));
            }
        }
        best.map(|(device, _)| device)
    }

    /// Entries ordered from highest to lowest utility.
    pub fn sorted_desc(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> =
            self.0.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for UtilityRecord {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<BTreeMap<String, f64>> for UtilityRecord {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}

impl From<UtilityRecord> for BTreeMap<String, f64> {
    fn from(record: UtilityRecord) -> Self {
        record.0
    }
}

/// A raw answer set as produced by one elicitation method.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodAnswer {
    /// Percentages per device (Standard Gamble).
    Direct(BTreeMap<String, f64>),

    /// Devices from most to least preferred (Pairwise Comparison).
    Ranking(Vec<String>),
}

/// Normalises either kind of answer onto the 0–100 scale.
pub fn normalise(answer: &MethodAnswer, scale: &ScaleConfig) -> Result<UtilityRecord> {
    match answer {
        MethodAnswer::Direct(percentages) => normalise_direct(percentages),
        MethodAnswer::Ranking(ranking) => normalise_rank(ranking, scale),
    }
}

/// Direct answers are already percentages and pass through unchanged.
///
/// Values outside `[0, 100]` (or non-finite) are rejected as malformed.
pub fn normalise_direct(percentages: &BTreeMap<String, f64>) -> Result<UtilityRecord> {
    for (device, &value) in percentages {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(Error::InvalidInput(format!(
                "utility for `{device}` must be a percentage, got {value}"
            )));
        }
    }
    Ok(UtilityRecord(percentages.clone()))
}

/// Maps a ranking (most preferred first) linearly onto `[floor, top]`.
///
/// For `n` devices and 1-based rank `r`:
/// `u(r) = (n - r) / (n - 1) * (top - floor) + floor`.
/// A single device receives `top`; an empty ranking yields an empty record.
///
/// # Examples
///
/// ```
/// use u_loadpref::utility::{normalise_rank, ScaleConfig};
///
/// let ranking: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
/// let utility = normalise_rank(&ranking, &ScaleConfig::default()).unwrap();
/// assert!((utility.get("A").unwrap() - 100.0).abs() < 1e-9);
/// assert!((utility.get("D").unwrap() - 0.1).abs() < 1e-9);
/// ```
pub fn normalise_rank(ranking: &[String], scale: &ScaleConfig) -> Result<UtilityRecord> {
    scale.validate().map_err(Error::InvalidConfig)?;

    let mut seen = HashSet::with_capacity(ranking.len());
    for device in ranking {
        if !seen.insert(device.as_str()) {
            return Err(Error::InvalidInput(format!(
                "device `{device}` appears more than once in the ranking"
            )));
        }
    }

    let n = ranking.len();
    if n == 1 {
        return Ok(UtilityRecord(BTreeMap::from([(
            ranking[0].clone(),
            scale.top,
        )])));
    }

    let span = scale.top - scale.floor;
    let utilities = ranking
        .iter()
        .enumerate()
        .map(|(i, device)| {
            let rank = i + 1;
            let u = (n - rank) as f64 / (n - 1) as f64 * span + scale.floor;
            (device.clone(), u)
        })
        .collect();
    Ok(UtilityRecord(utilities))
}
