//! Typed views over [`MatrixGraph`] storage.
//!
//! A raw [`MatrixGraph`] reads a cell either as a weight (undirected use) or
//! as an arc flag (directed use). The views below fix one reading each:
//! - [`UndirectedGraph`]: symmetric weighted edges, input to spanning trees
//! - [`DirectedGraph`]: unweighted arcs, input to topological sort
//!
//! The algorithms are generic over [`WeightedAdjacency`] and [`ArcAdjacency`],
//! which the views and the raw matrix all implement.

use std::fmt;

use super::matrix::MatrixGraph;
use super::node::{VertexId, Weight, ARC_WEIGHT};
use crate::Result;

/// Read access to edge weights.
///
/// Implementations must treat an index outside `[0, vertex_count())` as
/// "no edge"; a read never aliases another cell.
pub trait WeightedAdjacency {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Weight of the edge between `u` and `v`, or `None` if absent or out of range.
    fn weight(&self, u: usize, v: usize) -> Option<Weight>;
}

/// Read access to directed arcs.
///
/// Implementations must report `false` for an index outside
/// `[0, vertex_count())`.
pub trait ArcAdjacency {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Check if the arc `src -> dst` is present. `false` when out of range.
    fn has_arc(&self, src: usize, dst: usize) -> bool;
}

impl WeightedAdjacency for MatrixGraph {
    fn vertex_count(&self) -> usize {
        MatrixGraph::vertex_count(self)
    }

    fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.cell(u, v)
    }
}

/// On the raw matrix only a cell equal to [`ARC_WEIGHT`] counts as an arc.
impl ArcAdjacency for MatrixGraph {
    fn vertex_count(&self) -> usize {
        MatrixGraph::vertex_count(self)
    }

    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.cell(src, dst) == Some(ARC_WEIGHT)
    }
}

/// Weighted undirected graph.
///
/// Every insertion writes both mirror cells, so the matrix stays symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    matrix: MatrixGraph,
}

impl UndirectedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            matrix: MatrixGraph::new(vertex_count)?,
        })
    }

    /// Create a graph from `(a, b, weight)` triples.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, Weight)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count)?;
        for &(a, b, w) in edges {
            graph.add_edge(VertexId(a), VertexId(b), w)?;
        }
        Ok(graph)
    }

    /// Add (or overwrite) the edge between `a` and `b`.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<()> {
        self.matrix.add_undirected_edge(a, b, weight)
    }

    /// Weight of the edge between `a` and `b`.
    pub fn edge_weight(&self, a: VertexId, b: VertexId) -> Result<Option<Weight>> {
        self.matrix.edge_weight(a, b)
    }

    /// Neighbors of `u` with edge weights, ascending.
    pub fn neighbors(&self, u: VertexId) -> Result<impl Iterator<Item = (VertexId, Weight)> + '_> {
        self.matrix.row(u)
    }

    /// Edges as `(a, b, weight)` with `a <= b`, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.matrix.cells().filter(|(a, b, _)| a <= b)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> &MatrixGraph {
        &self.matrix
    }

    /// Unwrap into the underlying matrix.
    pub fn into_matrix(self) -> MatrixGraph {
        self.matrix
    }
}

impl WeightedAdjacency for UndirectedGraph {
    fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.matrix.cell(u, v)
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

/// Unweighted directed graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    matrix: MatrixGraph,
}

impl DirectedGraph {
    /// Create a graph with `vertex_count` vertices and no arcs.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            matrix: MatrixGraph::new(vertex_count)?,
        })
    }

    /// Create a graph from `(src, dst)` pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkernel_dense_graph::{DirectedGraph, VertexId};
    ///
    /// let graph = DirectedGraph::from_arcs(3, &[(0, 1), (1, 2)]).unwrap();
    /// assert!(graph.has_arc(VertexId(0), VertexId(1)).unwrap());
    /// assert!(!graph.has_arc(VertexId(1), VertexId(0)).unwrap());
    /// ```
    pub fn from_arcs(vertex_count: usize, arcs: &[(u32, u32)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count)?;
        for &(src, dst) in arcs {
            graph.add_arc(VertexId(src), VertexId(dst))?;
        }
        Ok(graph)
    }

    /// Add the arc `src -> dst`.
    pub fn add_arc(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.matrix.add_directed_arc(src, dst)
    }

    /// Check if the arc `src -> dst` is present.
    pub fn has_arc(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        Ok(self.matrix.edge_weight(src, dst)?.is_some())
    }

    /// Targets of arcs leaving `u`, ascending.
    pub fn successors(&self, u: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        Ok(self.matrix.row(u)?.map(|(v, _)| v))
    }

    /// Sources of arcs entering `v`, ascending.
    pub fn predecessors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        Ok(self.matrix.column(v)?.map(|(u, _)| u))
    }

    /// All arcs as `(src, dst)`, in row-major order.
    pub fn arcs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.matrix.cells().map(|(src, dst, _)| (src, dst))
    }

    /// Number of arcs.
    pub fn arc_count(&self) -> usize {
        self.matrix.edge_count()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> &MatrixGraph {
        &self.matrix
    }

    /// Unwrap into the underlying matrix.
    pub fn into_matrix(self) -> MatrixGraph {
        self.matrix
    }
}

impl ArcAdjacency for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.matrix.cell(src, dst).is_some()
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
