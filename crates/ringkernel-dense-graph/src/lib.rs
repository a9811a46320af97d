//! Dense adjacency-matrix graph algorithms for RingKernel.
//!
//! This crate stores a graph over a fixed vertex set as a V×V matrix and
//! runs two O(V²) algorithms over it:
//!
//! - **Matrix**: [`MatrixGraph`] with typed [`UndirectedGraph`] / [`DirectedGraph`] views
//! - **MST**: Prim's minimum spanning tree, with a Kruskal cross-check
//! - **Topological sort**: Kahn's algorithm with cycle detection
//! - **Reporting**: pluggable [`Reporter`] sinks for computed results
//!
//! # Example
//!
//! ```
//! use ringkernel_dense_graph::{compute_mst, compute_order, DirectedGraph, UndirectedGraph, VertexId};
//!
//! // Square 0-1-2-3 with one heavy edge
//! let graph = UndirectedGraph::from_edges(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 4)]).unwrap();
//! assert_eq!(compute_mst(&graph).unwrap(), 4);
//!
//! // 0 -> 1 -> 2
//! let dag = DirectedGraph::from_arcs(3, &[(0, 1), (1, 2)]).unwrap();
//! assert_eq!(compute_order(&dag).unwrap(), vec![VertexId(0), VertexId(1), VertexId(2)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod models;
pub mod report;

// Re-export main types
pub use algorithms::kruskal::kruskal_weight;
pub use algorithms::mst::{
    compute_mst, spanning_tree, spanning_tree_with_config, spanning_tree_with_reporter, MstConfig,
    SpanningTree,
};
pub use algorithms::topo::{compute_order, compute_order_with_reporter, in_degrees, is_topological_order};
pub use models::matrix::{MatrixGraph, MatrixGraphBuilder};
pub use models::node::{VertexId, Weight, ARC_WEIGHT};
pub use models::views::{ArcAdjacency, DirectedGraph, UndirectedGraph, WeightedAdjacency};
pub use report::{NullReporter, RecordingReporter, Report, Reporter, TracingReporter};

/// Graph error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex index outside `[0, V)`.
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending vertex index.
        vertex: u32,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Spanning tree requested but some vertex is unreachable from the root.
    #[error("Graph not connected: vertex {vertex} unreachable from root {root}")]
    NotConnected {
        /// Lowest-index vertex that could not be reached.
        vertex: u32,
        /// Root the tree was grown from.
        root: u32,
    },

    /// Topological sort requested on a graph with a directed cycle.
    #[error("Cycle detected: {} vertices could not be ordered", .remaining.len())]
    CycleDetected {
        /// Vertices left unordered, ascending.
        remaining: Vec<VertexId>,
    },

    /// Spanning tree root outside `[0, V)`.
    #[error("Invalid root {root} for graph with {vertex_count} vertices")]
    InvalidRoot {
        /// Requested root.
        root: u32,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Vertex count too large for a dense matrix.
    #[error("Cannot allocate a {vertex_count}x{vertex_count} matrix")]
    CapacityOverflow {
        /// Requested vertex count.
        vertex_count: usize,
    },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
