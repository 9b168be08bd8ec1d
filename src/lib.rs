//! # Baysep - D-separation and I-equivalence for Bayesian networks
//!
//! Baysep answers two structural queries about directed acyclic graphs that
//! represent Bayesian network structures:
//!
//! - **d-separation**: are two nodes conditionally independent given an
//!   observed set, in every distribution consistent with the graph?
//! - **I-equivalence**: do two network structures encode exactly the same set
//!   of independence statements?
//!
//! Both criteria follow Koller and Friedman (2009), "Probabilistic Graphical
//! Models: Principles and Techniques": d-separation via the two-phase
//! "Reachable" procedure (p. 75), I-equivalence via the skeleton-plus-
//! immoralities characterization.
//!
//! ## Architecture
//!
//! - **frontend**: Line-oriented parsers for the two textual input formats
//! - **engine**: Graph model, ancestral closures, active-trail reachability,
//!   and the skeleton/immorality comparison
//!
//! ## Usage
//!
//! ```rust
//! use baysep::{is_d_separated, BayesNet};
//!
//! let net = BayesNet::from_edges(&[("A", "B"), ("B", "C")]);
//! assert!(is_d_separated(&net, "A", "C", &["B"]));
//! assert!(!is_d_separated(&net, "A", "C", &[]));
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod frontend;

// Re-export commonly used types
pub use engine::equivalence::are_i_equivalent;
pub use engine::errors::QueryError;
pub use engine::graph::{BayesNet, NodeId};

use rustc_hash::FxHashSet;

/// Checks whether `x` and `y` are d-separated given `observed`, by label.
///
/// Labels never declared through an edge behave as isolated nodes: no trail
/// passes through them, so they are d-separated from everything but
/// themselves. A self-query (`x == y`) reports `false` under the convention
/// that a node is trivially dependent on itself, unless the node is part of
/// the evidence.
pub fn is_d_separated(net: &BayesNet, x: &str, y: &str, observed: &[&str]) -> bool {
    match (net.node_id(x), net.node_id(y)) {
        (Some(x), Some(y)) => {
            let observed: FxHashSet<NodeId> =
                observed.iter().filter_map(|l| net.node_id(l)).collect();
            engine::reachable::is_d_separated(net, x, y, &observed)
        }
        // An undeclared endpoint has no edges, hence no active trails; the
        // degenerate self-query stays dependent unless observed.
        _ => x != y || observed.contains(&x),
    }
}

/// Runs a full d-separation batch: parses the `N M Q` input format, builds
/// the network, and answers the `Q` queries in input order.
///
/// # Errors
///
/// Returns [`QueryError::Parse`] or [`QueryError::Validation`] if the input
/// text is malformed; no partial results are produced.
pub fn run_dsep(source: &str) -> Result<Vec<bool>, QueryError> {
    let input = frontend::parser::parse_dsep_input(source)?;
    let net = BayesNet::from_edges(&input.graph.edges);
    Ok(input
        .queries
        .iter()
        .map(|q| {
            let observed: Vec<&str> = q.observed.iter().map(String::as_str).collect();
            is_d_separated(&net, &q.x, &q.y, &observed)
        })
        .collect())
}

/// Runs a full I-equivalence comparison: parses the `N1 M1` / `N2 M2` input
/// format, builds both networks, and compares skeletons and immoralities.
///
/// # Errors
///
/// Returns [`QueryError::Parse`] or [`QueryError::Validation`] if the input
/// text is malformed.
pub fn run_iequiv(source: &str) -> Result<bool, QueryError> {
    let input = frontend::parser::parse_iequiv_input(source)?;
    let first = BayesNet::from_edges(&input.first.edges);
    let second = BayesNet::from_edges(&input.second.edges);
    Ok(are_i_equivalent(&first, &second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_dsep_answers_worked_example() {
        // The worked example from the format description: A --> B --> C.
        let src = "3 2 2\nA B\nB C\nA C | B\nC A |\n";
        let verdicts = run_dsep(src).unwrap();
        assert_eq!(verdicts, vec![true, false]);
    }

    #[test]
    fn run_dsep_rejects_malformed_header() {
        let src = "3 2\nA B\nB C\n";
        assert!(run_dsep(src).is_err());
    }

    #[test]
    fn run_iequiv_answers_worked_example() {
        // Chain A --> B --> C versus collider A --> B <-- C.
        let src = "3 2\nA B\nB C\n3 2\nC B\nA B\n";
        assert!(!run_iequiv(src).unwrap());
    }

    #[test]
    fn run_iequiv_accepts_reversed_chain() {
        let src = "3 2\nA B\nB C\n3 2\nC B\nB A\n";
        assert!(run_iequiv(src).unwrap());
    }

    #[test]
    fn is_d_separated_treats_unknown_labels_as_isolated() {
        let net = BayesNet::from_edges(&[("A", "B")]);
        assert!(is_d_separated(&net, "A", "Q", &[]));
        assert!(is_d_separated(&net, "Q", "R", &[]));
        assert!(!is_d_separated(&net, "Q", "Q", &[]));
    }

    #[test]
    fn is_d_separated_self_query_is_dependent() {
        let net = BayesNet::from_edges(&[("A", "B")]);
        assert!(!is_d_separated(&net, "A", "A", &[]));
    }
}
