//! Two-phase active-trail search deciding d-separation.
//!
//! This implements the "Reachable" procedure of Koller and Friedman (2009),
//! p. 75: `X` and `Y` are d-separated given `Z` iff no active trail connects
//! them. The search walks `(node, direction)` states rather than plain nodes
//! because trail activity depends on how a node was entered:
//!
//! - `Up` means the node was reached from a child (moving toward parents).
//!   An unobserved node entered this way passes the trail to all of its
//!   parents and children; an observed one blocks it (chain/fork blocking).
//! - `Down` means the node was reached from a parent. The trail continues
//!   through children while the node is unobserved, and turns back up through
//!   parents only when the node is an ancestor of evidence, which is the
//!   collider-activation rule: a v-structure passes influence only if the
//!   collider or one of its descendants is observed.
//!
//! The visited set ranges over the same tagged domain, so the search touches
//! at most `2 * node_count` states and always terminates, cycles included.

use rustc_hash::FxHashSet;

use super::ancestors::ancestral_closure;
use super::graph::{BayesNet, NodeId};

/// How a node was entered during the trail walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    /// Entered from a child, moving toward parents.
    Up,
    /// Entered from a parent, moving toward children.
    Down,
}

/// Checks whether `x` and `y` are d-separated given `observed`.
///
/// Equivalent to the negation of [`active_trail_exists`]. Ids foreign to
/// `net` simply have no adjacency, so an undeclared endpoint is d-separated
/// from every other node.
pub fn is_d_separated(
    net: &BayesNet,
    x: NodeId,
    y: NodeId,
    observed: &FxHashSet<NodeId>,
) -> bool {
    !active_trail_exists(net, x, y, observed)
}

/// Checks whether some trail from `x` to `y` is active given `observed`.
///
/// Phase I computes the ancestral closure of `{x, y} ∪ observed`; nodes
/// outside it cannot lie on an active trail (every node on one is an
/// ancestor of a query node or of evidence), so they are never enqueued.
/// Phase II runs the tagged work-list search described in the module docs.
///
/// A degenerate self-query (`x == y`) reports an active trail unless the
/// node is itself observed: the start state is popped and immediately
/// matches the target. An observed target is never counted as reached, so a
/// query whose evidence contains an endpoint reports separation from either
/// side.
pub fn active_trail_exists(
    net: &BayesNet,
    x: NodeId,
    y: NodeId,
    observed: &FxHashSet<NodeId>,
) -> bool {
    // The closure of the evidence contains the evidence itself, so the
    // collider rule's "observed or ancestor of observed" test is a single
    // membership check.
    let evidence_ancestors = ancestral_closure(net, observed.iter().copied());
    let relevant = ancestral_closure(net, observed.iter().copied().chain([x, y]));

    let mut visited: FxHashSet<(NodeId, Direction)> = FxHashSet::default();
    let mut pending = vec![(x, Direction::Up)];

    while let Some((node, direction)) = pending.pop() {
        if !visited.insert((node, direction)) {
            continue;
        }
        // An observed target never counts as reached: the search may still
        // pass through it, but influence cannot terminate at evidence. This
        // also keeps the relation symmetric when the evidence contains an
        // endpoint (an observed start blocks immediately).
        if node == y && !observed.contains(&node) {
            #[cfg(feature = "tracing")]
            tracing::trace!(states = visited.len(), "active trail found");
            return true;
        }

        match direction {
            Direction::Up if !observed.contains(&node) => {
                for &parent in net.parents(node) {
                    if relevant.contains(&parent) {
                        pending.push((parent, Direction::Up));
                    }
                }
                for &child in net.children(node) {
                    if relevant.contains(&child) {
                        pending.push((child, Direction::Down));
                    }
                }
            }
            // Observed node entered from a child: chain/fork blocking.
            Direction::Up => {}
            Direction::Down => {
                if !observed.contains(&node) {
                    for &child in net.children(node) {
                        if relevant.contains(&child) {
                            pending.push((child, Direction::Down));
                        }
                    }
                }
                // Collider activation, independent of the block above.
                if evidence_ancestors.contains(&node) {
                    for &parent in net.parents(node) {
                        if relevant.contains(&parent) {
                            pending.push((parent, Direction::Up));
                        }
                    }
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(states = visited.len(), "no active trail");
    false
}
