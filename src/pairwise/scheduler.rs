//! Choosing the next pair to put to the respondent.

use super::relation::DominanceRelation;
use crate::device::DeviceId;
use std::collections::HashSet;

/// Unordered device pairs already presented to the respondent.
///
/// Grows monotonically within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedPairs {
    pairs: HashSet<(usize, usize)>,
}

impl CheckedPairs {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: DeviceId, b: DeviceId) -> (usize, usize) {
        (a.0.min(b.0), a.0.max(b.0))
    }

    /// Marks the pair as asked. Returns `false` if it already was.
    pub fn insert(&mut self, a: DeviceId, b: DeviceId) -> bool {
        self.pairs.insert(Self::key(a, b))
    }

    /// Whether the pair was asked, in either orientation.
    pub fn contains(&self, a: DeviceId, b: DeviceId) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Returns the first pair, in canonical `i < j` index order, that has not
/// been asked and is not already settled by the relation.
///
/// `None` means every pair is settled and a ranking can be extracted. The
/// fixed scan order makes the question sequence reproducible for a given
/// set of answers.
pub fn next_pair(
    relation: &DominanceRelation,
    checked: &CheckedPairs,
) -> Option<(DeviceId, DeviceId)> {
    let n = relation.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (DeviceId(i), DeviceId(j));
            if checked.contains(a, b) || relation.determines(a, b) {
                continue;
            }
            return Some((a, b));
        }
    }
    None
}
