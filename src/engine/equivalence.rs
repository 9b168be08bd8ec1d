//! Skeleton and immorality comparison for I-equivalence.
//!
//! Two network structures encode the same set of independence statements iff
//! they share both their skeleton (the undirected edge set) and their
//! immoralities (unshielded colliders) — the Koller–Friedman
//! characterization. Both are computed as sets of normalized unordered node
//! pairs, so discovery order, duplicate edges, and anti-parallel edges never
//! change the result.

use rustc_hash::FxHashSet;

use super::graph::{BayesNet, NodeId};

/// Normalizes an unordered pair to `(min, max)` id order.
fn unordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The skeleton of a network: every directed edge with its direction dropped.
///
/// Edges present in both directions collapse to a single unordered pair.
pub fn skeleton(net: &BayesNet) -> FxHashSet<(NodeId, NodeId)> {
    net.edges().map(|(src, dst)| unordered(src, dst)).collect()
}

/// All immoralities (v-structures) of a network.
///
/// An immorality is an unordered pair of distinct parents that share a child
/// but have no edge between them in either direction. A pair discovered via
/// several common children appears once.
pub fn immoralities(net: &BayesNet) -> FxHashSet<(NodeId, NodeId)> {
    let mut found = FxHashSet::default();
    for child in net.node_ids() {
        let parents = net.parents(child);
        for (i, &a) in parents.iter().enumerate() {
            for &b in &parents[i + 1..] {
                if !net.has_edge(a, b) && !net.has_edge(b, a) {
                    found.insert(unordered(a, b));
                }
            }
        }
    }
    found
}

/// Checks whether two network structures are I-equivalent.
///
/// True iff the skeletons are set-equal and the immorality sets are
/// set-equal; the cheaper skeleton check runs first. Node ids are private to
/// each graph, so pairs are compared through their labels, re-normalized by
/// label order.
pub fn are_i_equivalent(first: &BayesNet, second: &BayesNet) -> bool {
    if relabel(first, &skeleton(first)) != relabel(second, &skeleton(second)) {
        return false;
    }
    relabel(first, &immoralities(first)) == relabel(second, &immoralities(second))
}

/// Maps id pairs onto label pairs for cross-graph comparison.
fn relabel<'a>(
    net: &'a BayesNet,
    pairs: &FxHashSet<(NodeId, NodeId)>,
) -> FxHashSet<(&'a str, &'a str)> {
    pairs
        .iter()
        .filter_map(|&(a, b)| {
            let (a, b) = (net.label(a)?, net.label(b)?);
            Some(if a <= b { (a, b) } else { (b, a) })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(net: &BayesNet, a: &str, b: &str) -> (NodeId, NodeId) {
        unordered(net.node_id(a).unwrap(), net.node_id(b).unwrap())
    }

    #[test]
    fn skeleton_drops_direction() {
        let net = BayesNet::from_edges(&[("A", "B"), ("B", "C")]);

        let ske = skeleton(&net);
        assert_eq!(ske.len(), 2);
        assert!(ske.contains(&pair(&net, "A", "B")));
        assert!(ske.contains(&pair(&net, "B", "C")));
    }

    #[test]
    fn skeleton_collapses_anti_parallel_edges() {
        let net = BayesNet::from_edges(&[("A", "B"), ("B", "A")]);

        assert_eq!(skeleton(&net).len(), 1);
    }

    #[test]
    fn chain_has_no_immorality() {
        let net = BayesNet::from_edges(&[("A", "B"), ("B", "C")]);
        assert!(immoralities(&net).is_empty());
    }

    #[test]
    fn collider_with_unconnected_parents_is_immoral() {
        let net = BayesNet::from_edges(&[("A", "B"), ("C", "B")]);

        let immoral = immoralities(&net);
        assert_eq!(immoral.len(), 1);
        assert!(immoral.contains(&pair(&net, "A", "C")));
    }

    #[test]
    fn shielded_collider_is_not_immoral() {
        let net = BayesNet::from_edges(&[("A", "B"), ("C", "B"), ("A", "C")]);
        assert!(immoralities(&net).is_empty());
    }

    #[test]
    fn shared_children_report_the_pair_once() {
        let net = BayesNet::from_edges(&[("A", "B"), ("C", "B"), ("A", "D"), ("C", "D")]);

        let immoral = immoralities(&net);
        assert_eq!(immoral.len(), 1);
        assert!(immoral.contains(&pair(&net, "A", "C")));
    }

    #[test]
    fn three_parent_collider_yields_all_pairs() {
        let net = BayesNet::from_edges(&[("A", "D"), ("B", "D"), ("C", "D")]);

        assert_eq!(immoralities(&net).len(), 3);
    }

    #[test]
    fn chain_and_collider_share_skeleton_but_differ() {
        let chain = BayesNet::from_edges(&[("A", "B"), ("B", "C")]);
        let collider = BayesNet::from_edges(&[("A", "B"), ("C", "B")]);

        assert_eq!(
            relabel(&chain, &skeleton(&chain)),
            relabel(&collider, &skeleton(&collider))
        );
        assert!(!are_i_equivalent(&chain, &collider));
    }

    #[test]
    fn reversed_chain_is_equivalent() {
        let forward = BayesNet::from_edges(&[("A", "B"), ("B", "C")]);
        let backward = BayesNet::from_edges(&[("C", "B"), ("B", "A")]);

        assert!(are_i_equivalent(&forward, &backward));
    }

    #[test]
    fn equivalence_is_reflexive_and_symmetric() {
        let g1 = BayesNet::from_edges(&[("A", "B"), ("C", "B"), ("B", "D")]);
        let g2 = BayesNet::from_edges(&[("A", "B"), ("C", "B"), ("D", "B")]);

        assert!(are_i_equivalent(&g1, &g1));
        assert!(are_i_equivalent(&g2, &g2));
        assert_eq!(are_i_equivalent(&g1, &g2), are_i_equivalent(&g2, &g1));
    }

    #[test]
    fn skeleton_mismatch_short_circuits_to_false() {
        let g1 = BayesNet::from_edges(&[("A", "B")]);
        let g2 = BayesNet::from_edges(&[("A", "B"), ("B", "C")]);

        assert!(!are_i_equivalent(&g1, &g2));
    }

    #[test]
    fn label_identity_matters_not_node_ids() {
        // Same structure, labels introduced in different order so the ids
        // differ across the two graphs.
        let g1 = BayesNet::from_edges(&[("A", "B"), ("B", "C")]);
        let g2 = BayesNet::from_edges(&[("B", "C"), ("A", "B")]);

        assert!(are_i_equivalent(&g1, &g2));
    }
}
