//! The query engine for Bayesian network structures.
//!
//! This module provides:
//! - **errors**: Error types for input-processing failures
//! - **graph**: The directed graph model with parent/child adjacency
//! - **ancestors**: Ancestral closure under the parent relation
//! - **reachable**: Two-phase active-trail search deciding d-separation
//! - **equivalence**: Skeleton and immorality comparison for I-equivalence

pub mod ancestors;
pub mod equivalence;
pub mod errors;
pub mod graph;
pub mod reachable;
