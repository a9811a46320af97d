//! Graph algorithms.
//!
//! This module provides the dense-matrix graph algorithms:
//! - [`mst`]: Prim's minimum spanning tree
//! - [`kruskal`]: Kruskal's spanning tree weight, for cross-checking
//! - [`topo`]: Kahn's topological sort

pub mod kruskal;
pub mod mst;
pub mod topo;

pub use kruskal::kruskal_weight;
pub use mst::{
    compute_mst, spanning_tree, spanning_tree_with_config, spanning_tree_with_reporter, MstConfig,
    SpanningTree,
};
pub use topo::{compute_order, compute_order_with_reporter, in_degrees, is_topological_order};
