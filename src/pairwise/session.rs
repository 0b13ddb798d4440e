//! One respondent's pairwise-comparison survey.

use super::ranking::rank;
use super::relation::DominanceRelation;
use super::scheduler::{next_pair, CheckedPairs};
use crate::device::{DeviceCatalog, DeviceId};
use crate::error::{Error, Result};
use crate::utility::{normalise_rank, ScaleConfig, UtilityRecord};
use tracing::{debug, warn};

/// Progress counters for a running survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Answers that added information; confirming an already settled pair
    /// does not count.
    pub questions_asked: usize,
    /// Pairs settled, by answer or by deduction.
    pub determined_pairs: usize,
    /// All unordered pairs, `n (n - 1) / 2`.
    pub total_pairs: usize,
}

impl SessionProgress {
    /// Pairs settled without asking.
    pub fn deduced_pairs(&self) -> usize {
        self.determined_pairs.saturating_sub(self.questions_asked)
    }

    pub fn remaining_pairs(&self) -> usize {
        self.total_pairs - self.determined_pairs
    }
}

/// Survey state owned by exactly one respondent.
///
/// Built fresh when the respondent starts and dropped when the utility
/// record has been produced. Sessions never share a relation, so
/// concurrent respondents each hold their own instance.
///
/// # Examples
///
/// ```
/// use u_loadpref::device::{Device, DeviceCatalog};
/// use u_loadpref::pairwise::PairwiseSession;
/// use u_loadpref::utility::ScaleConfig;
///
/// let catalog = DeviceCatalog::new(vec![
///     Device::new("Fridge", 1104.0),
///     Device::new("Lamp", 672.0),
/// ])
/// .unwrap();
/// let mut session = PairwiseSession::new(&catalog);
///
/// while let Some((a, b)) = session.next_pair() {
///     let (a, b) = (a.to_string(), b.to_string());
///     session.record_choice(&a, &b).unwrap();
/// }
/// assert_eq!(session.ranking(), vec!["Fridge", "Lamp"]);
/// let utility = session.utility_record(&ScaleConfig::default()).unwrap();
/// assert_eq!(utility.get("Fridge"), Some(100.0));
/// ```
#[derive(Debug, Clone)]
pub struct PairwiseSession {
    catalog: DeviceCatalog,
    relation: DominanceRelation,
    checked: CheckedPairs,
}

impl PairwiseSession {
    pub fn new(catalog: &DeviceCatalog) -> Self {
        Self {
            catalog: catalog.clone(),
            relation: DominanceRelation::new(catalog.len()),
            checked: CheckedPairs::new(),
        }
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn relation(&self) -> &DominanceRelation {
        &self.relation
    }

    /// Next pair to present, or `None` once every pair is settled.
    pub fn next_pair(&self) -> Option<(&str, &str)> {
        self.next_pair_ids()
            .map(|(a, b)| (self.catalog.name(a), self.catalog.name(b)))
    }

    pub fn next_pair_ids(&self) -> Option<(DeviceId, DeviceId)> {
        next_pair(&self.relation, &self.checked)
    }

    /// Records the respondent's answer: `winner` is preferred to `loser`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDevice`] for a name outside the catalog.
    /// - [`Error::InvalidInput`] when both names are the same device.
    /// - [`Error::InvariantViolation`] when the answer contradicts what is
    ///   already established; the session is left unchanged.
    pub fn record_choice(&mut self, winner: &str, loser: &str) -> Result<()> {
        let w = self.catalog.require(winner)?;
        let l = self.catalog.require(loser)?;
        if w == l {
            return Err(Error::InvalidInput(format!(
                "device `{winner}` cannot be compared with itself"
            )));
        }

        let added = self
            .relation
            .record(w, l)
            .map_err(|c| Error::InvariantViolation {
                winner: self.catalog.name(c.winner).to_string(),
                loser: self.catalog.name(c.loser).to_string(),
            })?;
        // An answer the relation already implied is not a new question.
        if added {
            self.checked.insert(w, l);
        }

        let progress = self.progress();
        debug!(
            winner,
            loser,
            asked = progress.questions_asked,
            determined = progress.determined_pairs,
            total = progress.total_pairs,
            "pairwise answer recorded"
        );
        Ok(())
    }

    /// Whether every pair is settled.
    pub fn is_complete(&self) -> bool {
        self.next_pair_ids().is_none()
    }

    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            questions_asked: self.checked.len(),
            determined_pairs: self.relation.determined_pairs(),
            total_pairs: self.relation.total_pairs(),
        }
    }

    /// Devices from most to least preferred.
    ///
    /// Available at any time; on an unfinished survey undetermined pairs
    /// keep their DFS visitation order, which carries no preference meaning.
    pub fn ranking(&self) -> Vec<String> {
        if !self.is_complete() {
            warn!(
                remaining = self.progress().remaining_pairs(),
                "ranking extracted from a partially resolved relation"
            );
        }
        rank(&self.relation)
            .into_iter()
            .map(|id| self.catalog.name(id).to_string())
            .collect()
    }

    /// Utilities for the finished survey on the rank scale.
    ///
    /// # Errors
    ///
    /// [`Error::IncompleteSurvey`] while pairs remain undetermined.
    pub fn utility_record(&self, scale: &ScaleConfig) -> Result<UtilityRecord> {
        if !self.is_complete() {
            return Err(Error::IncompleteSurvey {
                remaining: self.progress().remaining_pairs(),
            });
        }
        normalise_rank(&self.ranking(), scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;

    fn abcd() -> DeviceCatalog {
        DeviceCatalog::new(
            ["A", "B", "C", "D"]
                .iter()
                .map(|name| Device::new(*name, 100.0))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_chain_scenario() {
        let mut session = PairwiseSession::new(&abcd());
        assert_eq!(session.next_pair(), Some(("A", "B")));
        session.record_choice("A", "B").unwrap();
        assert_eq!(session.next_pair(), Some(("A", "C")));
        session.record_choice("B", "C").unwrap();
        session.record_choice("C", "D").unwrap();

        let rel = session.relation();
        let id = |n: &str| session.catalog().id_of(n).unwrap();
        assert!(rel.beats(id("A"), id("C")));
        assert!(rel.beats(id("A"), id("D")));
        assert!(rel.beats(id("B"), id("D")));
        assert_eq!(session.next_pair(), None);
        assert_eq!(session.ranking(), vec!["A", "B", "C", "D"]);

        let utility = session.utility_record(&ScaleConfig::default()).unwrap();
        assert!((utility.get("A").unwrap() - 100.0).abs() < 1e-9);
        assert!((utility.get("B").unwrap() - 66.7).abs() < 1e-9);
        assert!((utility.get("C").unwrap() - 33.4).abs() < 1e-9);
        assert!((utility.get("D").unwrap() - 0.1).abs() < 1e-9);

        let progress = session.progress();
        assert_eq!(progress.questions_asked, 3);
        assert_eq!(progress.deduced_pairs(), 3);
        assert_eq!(progress.remaining_pairs(), 0);
    }

    #[test]
    fn test_answer_to_settled_pair_is_not_counted() {
        let mut session = PairwiseSession::new(&abcd());
        session.record_choice("A", "B").unwrap();
        session.record_choice("B", "C").unwrap();
        session.record_choice("C", "D").unwrap();

        // A over D was deduced; repeating it or an earlier answer is a no-op.
        session.record_choice("A", "D").unwrap();
        session.record_choice("A", "B").unwrap();

        let progress = session.progress();
        assert_eq!(progress.questions_asked, 3);
        assert_eq!(progress.deduced_pairs(), 3);
        assert_eq!(progress.remaining_pairs(), 0);
    }

    #[test]
    fn test_scheduled_walkthrough_asks_each_pair_once() {
        // Hidden preference: D > C > B > A, answered as asked.
        let preference = ["D", "C", "B", "A"];
        let rank_of = |n: &str| preference.iter().position(|p| *p == n).unwrap();

        let mut session = PairwiseSession::new(&abcd());
        let mut asked = Vec::new();
        while let Some((a, b)) = session.next_pair() {
            let (a, b) = (a.to_string(), b.to_string());
            asked.push((a.clone(), b.clone()));
            if rank_of(&a) < rank_of(&b) {
                session.record_choice(&a, &b).unwrap();
            } else {
                session.record_choice(&b, &a).unwrap();
            }
        }

        assert!(asked.len() <= 6);
        let mut unique = asked.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), asked.len());
        assert_eq!(session.ranking(), preference.to_vec());
    }

    #[test]
    fn test_contradiction_surfaces_names() {
        let mut session = PairwiseSession::new(&abcd());
        session.record_choice("A", "B").unwrap();
        session.record_choice("B", "C").unwrap();
        let before = session.progress();

        let err = session.record_choice("C", "A").unwrap_err();
        assert_eq!(
            err,
            Error::InvariantViolation {
                winner: "C".into(),
                loser: "A".into()
            }
        );
        assert_eq!(session.progress(), before);
    }

    #[test]
    fn test_rejects_unknown_and_self_comparison() {
        let mut session = PairwiseSession::new(&abcd());
        assert!(matches!(
            session.record_choice("A", "Z"),
            Err(Error::UnknownDevice(name)) if name == "Z"
        ));
        assert!(matches!(
            session.record_choice("B", "B"),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(session.progress().questions_asked, 0);
    }

    #[test]
    fn test_incomplete_survey_has_no_utilities() {
        let mut session = PairwiseSession::new(&abcd());
        session.record_choice("A", "B").unwrap();
        assert!(!session.is_complete());
        assert_eq!(
            session.utility_record(&ScaleConfig::default()),
            Err(Error::IncompleteSurvey { remaining: 5 })
        );
        // Ranking remains available and complete as a permutation.
        assert_eq!(session.ranking().len(), 4);
    }

    #[test]
    fn test_single_device_survey() {
        let catalog = DeviceCatalog::new(vec![Device::new("Solo", 5.0)]).unwrap();
        let session = PairwiseSession::new(&catalog);
        assert!(session.is_complete());
        let utility = session.utility_record(&ScaleConfig::default()).unwrap();
        assert_eq!(utility.get("Solo"), Some(100.0));
    }

    #[test]
    fn test_sessions_are_independent() {
        let catalog = abcd();
        let mut first = PairwiseSession::new(&catalog);
        let second = PairwiseSession::new(&catalog);
        first.record_choice("D", "A").unwrap();
        assert_eq!(second.progress().determined_pairs, 0);
        assert_eq!(second.next_pair(), Some(("A", "B")));
    }
}
