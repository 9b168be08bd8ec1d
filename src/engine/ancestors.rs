//! Ancestral closure under the parent relation.
//!
//! The closure of a seed set is every node from which some seed node can be
//! reached by following directed edges forward; equivalently, the seed plus
//! all of its transitive parents. The d-separation search uses it twice:
//! once over `{X, Y} ∪ Z` to bound the trail search to relevant nodes, and
//! once over `Z` alone to decide which colliders downstream evidence opens.

use rustc_hash::FxHashSet;

use super::graph::{BayesNet, NodeId};

/// Computes the closure of `seed` under the parent relation.
///
/// The result always contains every seed node. Worklist-driven: each node is
/// expanded at most once, so a cyclic graph still terminates.
pub fn ancestral_closure<I>(net: &BayesNet, seed: I) -> FxHashSet<NodeId>
where
    I: IntoIterator<Item = NodeId>,
{
    let mut closure: FxHashSet<NodeId> = seed.into_iter().collect();
    let mut pending: Vec<NodeId> = closure.iter().copied().collect();

    while let Some(node) = pending.pop() {
        for &parent in net.parents(node) {
            if closure.insert(parent) {
                pending.push(parent);
            }
        }
    }

    closure
}
