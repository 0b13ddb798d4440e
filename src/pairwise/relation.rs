//! Transitively closed dominance relation.

use crate::device::DeviceId;
use std::collections::BTreeSet;
use tracing::debug;

/// A refused update: `loser` is already known to beat `winner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    pub winner: DeviceId,
    pub loser: DeviceId,
}

/// Directed "beats" relation over the devices of one respondent session.
///
/// Each device index holds the set of device indices it beats, directly or
/// by inference. The relation stays irreflexive, acyclic, and transitively
/// closed after every successful [`record`](Self::record): a single answer
/// can settle many undetermined pairs, and the closure must be complete
/// before the scheduler picks the next question.
///
/// # Examples
///
/// ```
/// use u_loadpref::device::DeviceId;
/// use u_loadpref::pairwise::DominanceRelation;
///
/// let (a, b, c) = (DeviceId(0), DeviceId(1), DeviceId(2));
/// let mut relation = DominanceRelation::new(3);
/// relation.record(a, b).unwrap();
/// relation.record(b, c).unwrap();
/// assert!(relation.beats(a, c));
/// assert!(relation.record(c, a).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominanceRelation {
    wins: Vec<BTreeSet<usize>>,
}

impl DominanceRelation {
    /// Creates an empty relation over `n` devices.
    pub fn new(n: usize) -> Self {
        Self {
            wins: vec![BTreeSet::new(); n],
        }
    }

    /// Number of devices the relation ranges over.
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Whether `a` is known to beat `b`, directly or through a chain.
    ///
    /// Performs a depth-first reachability walk with a visited guard, so it
    /// terminates even on a relation that was not kept closed.
    pub fn beats(&self, a: DeviceId, b: DeviceId) -> bool {
        let (a, b) = (a.0, b.0);
        if a == b || a >= self.len() || b >= self.len() {
            return false;
        }
        if self.wins[a].contains(&b) {
            return true;
        }

        let mut visited = vec![false; self.len()];
        visited[a] = true;
        let mut stack = vec![a];
        while let Some(u) = stack.pop() {
            for &v in &self.wins[u] {
                if v == b {
                    return true;
                }
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        false
    }

    /// Whether the pair is settled in either direction.
    pub fn determines(&self, a: DeviceId, b: DeviceId) -> bool {
        self.beats(a, b) || self.beats(b, a)
    }

    /// Records that `a` beats `b` and restores the transitive closure.
    ///
    /// Propagates forward (`a` now beats everything `b` beats) and backward
    /// (everything that beats `a` now beats `b` and what `b` beats).
    /// Returns `Ok(true)` when new facts were added, `Ok(false)` when the
    /// preference was already known or `a == b`.
    ///
    /// # Errors
    ///
    /// Returns a [`Contradiction`] and leaves the relation untouched when `b`
    /// is already known to beat `a`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is out of range.
    pub fn record(&mut self, a: DeviceId, b: DeviceId) -> Result<bool, Contradiction> {
        let n = self.len();
        assert!(
            a.0 < n && b.0 < n,
            "device handle out of range for a relation over {n} devices"
        );
        if a == b {
            return Ok(false);
        }
        if self.beats(b, a) {
            return Err(Contradiction {
                winner: a,
                loser: b,
            });
        }

        let (a, b) = (a.0, b.0);
        let above: Vec<usize> = std::iter::once(a)
            .chain((0..n).filter(|&y| y != a && self.wins[y].contains(&a)))
            .collect();
        let below: Vec<usize> = std::iter::once(b)
            .chain(self.wins[b].iter().copied())
            .collect();

        let mut added = 0usize;
        for &y in &above {
            for &x in &below {
                if x != y && self.wins[y].insert(x) {
                    added += 1;
                }
            }
        }

        debug!(
            winner = a,
            loser = b,
            new_facts = added,
            "recorded preference"
        );
        Ok(added > 0)
    }

    /// Devices `a` is known to beat, in index order.
    pub fn beaten_by(&self, a: DeviceId) -> impl Iterator<Item = DeviceId> + '_ {
        self.wins
            .get(a.0)
            .into_iter()
            .flat_map(|set| set.iter().map(|&i| DeviceId(i)))
    }

    pub(crate) fn successors(&self, a: usize) -> &BTreeSet<usize> {
        &self.wins[a]
    }

    /// Number of unordered pairs settled in one direction or the other.
    pub fn determined_pairs(&self) -> usize {
        // Closed and acyclic: every settled pair is stored exactly once.
        self.wins.iter().map(BTreeSet::len).sum()
    }

    /// Total number of unordered pairs, `n (n - 1) / 2`.
    pub fn total_pairs(&self) -> usize {
        let n = self.len();
        n * n.saturating_sub(1) / 2
    }

    /// Whether every pair is settled, i.e. the relation is a total order.
    pub fn is_total(&self) -> bool {
        self.determined_pairs() == self.total_pairs()
    }
}
