//! Bayesian network structure graph.
//!
//! [`BayesNet`] is the in-memory directed graph every query runs against:
//! a set of labeled nodes plus parent/child adjacency built once from the
//! edge list. The graph is treated as acyclic by contract but never checked;
//! the search algorithms bound themselves with visited-state tracking, so a
//! cyclic input terminates but its answers are meaningless.
//!
//! Adjacency is stored as two dense per-node lists (node -> parents,
//! node -> children) indexed by [`NodeId`], built up front so queries never
//! rescan the raw edge list. A directed-edge set backs O(1) `has_edge`
//! lookups and makes duplicate edges idempotent.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Maximum size for inline storage in adjacency lists.
const INLINE_ADJ_SIZE: usize = 4;

type AdjList = SmallVec<[NodeId; INLINE_ADJ_SIZE]>;

/// A unique identifier for a node in a network structure.
///
/// Ids are dense indices assigned in order of first appearance, valid only
/// within the [`BayesNet`] that issued them. Implements Ord/PartialOrd for
/// stable, deterministic pair normalization.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

/// A directed graph over opaque string labels, exposed through parent and
/// child adjacency.
///
/// Immutable by convention once built: construction interns labels and
/// records edges, and every query method takes `&self`.
#[derive(Debug, Clone, Default)]
pub struct BayesNet {
    /// NodeId -> label, in id order
    labels: Vec<Arc<str>>,
    /// label -> NodeId
    ids: FxHashMap<Arc<str>, NodeId>,
    /// NodeId -> direct predecessors, deduplicated
    parents: Vec<AdjList>,
    /// NodeId -> direct successors, deduplicated
    children: Vec<AdjList>,
    /// Directed edge membership, the source of truth for `has_edge`
    edge_set: FxHashSet<(NodeId, NodeId)>,
}

impl BayesNet {
    /// Creates an empty network structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from a list of directed edges `(src, dst)`.
    ///
    /// Duplicate edges are harmless; endpoint order within the list does not
    /// affect the resulting graph.
    pub fn from_edges<S: AsRef<str>>(edges: &[(S, S)]) -> Self {
        let mut net = Self::new();
        for (src, dst) in edges {
            net.add_edge(src.as_ref(), dst.as_ref());
        }
        net
    }

    /// Declares a node without attaching any edge, returning its id.
    ///
    /// Re-declaring an existing label returns the id it already holds.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len() as u32);
        let label: Arc<str> = Arc::from(label);
        self.labels.push(label.clone());
        self.ids.insert(label, id);
        self.parents.push(AdjList::new());
        self.children.push(AdjList::new());
        id
    }

    /// Records a directed edge `src --> dst`, implicitly declaring both
    /// endpoints.
    ///
    /// Duplicates are idempotent (the edge relation is a set, not a
    /// multiset) and self-loops are accepted without error.
    pub fn add_edge(&mut self, src: &str, dst: &str) {
        let src = self.add_node(src);
        let dst = self.add_node(dst);
        if self.edge_set.insert((src, dst)) {
            self.children[src.0 as usize].push(dst);
            self.parents[dst.0 as usize].push(src);
        }
    }

    /// Number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Looks up the id assigned to a label, if the label was ever declared.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// The label behind an id, if the id belongs to this graph.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id.0 as usize).map(|l| &**l)
    }

    /// Iterates over all node ids in declaration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len() as u32).map(NodeId)
    }

    /// Iterates over all distinct directed edges.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edge_set.iter().copied()
    }

    /// Direct predecessors of `node`.
    ///
    /// An id this graph never issued yields the empty slice rather than an
    /// error, so foreign or undeclared nodes simply have no connections.
    pub fn parents(&self, node: NodeId) -> &[NodeId] {
        self.parents.get(node.0 as usize).map_or(&[], |v| v.as_slice())
    }

    /// Direct successors of `node`; empty for undeclared ids.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children.get(node.0 as usize).map_or(&[], |v| v.as_slice())
    }

    /// Directed edge membership test.
    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.edge_set.contains(&(src, dst))
    }
}
