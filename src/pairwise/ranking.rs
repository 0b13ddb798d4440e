//! Total order extraction from a dominance relation.

use super::relation::DominanceRelation;
use crate::device::DeviceId;

/// Orders devices from most to least preferred.
///
/// Depth-first post-order over the "beats" graph, started from every
/// unvisited device in index order (successors in ascending index order),
/// then reversed. A device is emitted only after everything it beats.
///
/// The result is always a permutation of all devices. If some pairs are
/// still undetermined, their relative order follows the DFS visitation
/// order: stable, but not a statement of preference.
pub fn rank(relation: &DominanceRelation) -> Vec<DeviceId> {
    let n = relation.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        // (node, its successors, next successor to look at)
        let mut stack: Vec<(usize, Vec<usize>, usize)> = vec![(
            root,
            relation.successors(root).iter().copied().collect(),
            0,
        )];

        while let Some((node, successors, cursor)) = stack.last_mut() {
            if let Some(&next) = successors.get(*cursor) {
                *cursor += 1;
                if !visited[next] {
                    visited[next] = true;
                    let children = relation.successors(next).iter().copied().collect();
                    stack.push((next, children, 0));
                }
            } else {
                order.push(DeviceId(*node));
                stack.pop();
            }
        }
    }

    order.reverse();
    order
}
