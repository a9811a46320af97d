//! Dense adjacency matrix storage.
//!
//! A graph with V vertices is stored as V×V cells in row-major order:
//! - `cells[row * V + col]` = weight of the edge/arc from `row` to `col`
//! - `None` = no edge
//!
//! Space is O(V²) regardless of edge count, so this format targets dense,
//! moderately sized graphs. Row scans are contiguous; column scans stride by V.

use std::fmt;

use super::node::{VertexId, Weight, ARC_WEIGHT};
use crate::{GraphError, Result};

/// Dense V×V adjacency matrix.
///
/// The vertex count is fixed at construction. Cells are only ever written by
/// [`add_undirected_edge`](Self::add_undirected_edge) and
/// [`add_directed_arc`](Self::add_directed_arc); there is no removal.
///
/// The same storage serves both weighted undirected use (symmetric cells) and
/// directed use (a cell equal to [`ARC_WEIGHT`] marks an arc). The typed views
/// in [`views`](super::views) keep the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    vertex_count: usize,
    cells: Vec<Option<Weight>>,
}

impl MatrixGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// Zero vertices is a valid empty graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityOverflow`] if V×V does not fit in `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkernel_dense_graph::{MatrixGraph, VertexId};
    ///
    /// let mut graph = MatrixGraph::new(3).unwrap();
    /// graph.add_undirected_edge(VertexId(0), VertexId(2), 7).unwrap();
    /// assert_eq!(graph.edge_weight(VertexId(2), VertexId(0)).unwrap(), Some(7));
    /// assert_eq!(graph.edge_weight(VertexId(0), VertexId(1)).unwrap(), None);
    /// ```
    pub fn new(vertex_count: usize) -> Result<Self> {
        let len = vertex_count
            .checked_mul(vertex_count)
            .filter(|_| vertex_count <= u32::MAX as usize)
            .ok_or(GraphError::CapacityOverflow { vertex_count })?;

        Ok(Self {
            vertex_count,
            cells: vec![None; len],
        })
    }

    /// Number of vertices (V).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Number of occupied cells.
    ///
    /// An undirected edge between distinct vertices occupies two cells.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over all vertex IDs in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count as u32).map(VertexId)
    }

    /// Set both `(v1, v2)` and `(v2, v1)` to `weight`.
    ///
    /// Both indices are validated before anything is written.
    pub fn add_undirected_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> Result<()> {
        let a = self.check(v1)?;
        let b = self.check(v2)?;

        let n = self.vertex_count;
        self.cells[a * n + b] = Some(weight);
        self.cells[b * n + a] = Some(weight);
        Ok(())
    }

    /// Mark a directed arc `src -> dst`.
    ///
    /// Leaves `(dst, src)` untouched.
    pub fn add_directed_arc(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        let s = self.check(src)?;
        let d = self.check(dst)?;

        self.cells[s * self.vertex_count + d] = Some(ARC_WEIGHT);
        Ok(())
    }

    /// Stored weight of cell `(v1, v2)`, or `None` if no edge is present.
    pub fn edge_weight(&self, v1: VertexId, v2: VertexId) -> Result<Option<Weight>> {
        let a = self.check(v1)?;
        let b = self.check(v2)?;
        Ok(self.cell(a, b))
    }

    /// Check if cell `(src, dst)` holds a directed arc.
    pub fn has_arc(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        Ok(self.edge_weight(src, dst)? == Some(ARC_WEIGHT))
    }

    /// Occupied cells of row `u`, as `(column, weight)` in ascending column order.
    pub fn row(&self, u: VertexId) -> Result<impl Iterator<Item = (VertexId, Weight)> + '_> {
        let r = self.check(u)?;
        let n = self.vertex_count;
        Ok(self.cells[r * n..(r + 1) * n]
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|w| (VertexId(col as u32), w))))
    }

    /// Occupied cells of column `v`, as `(row, weight)` in ascending row order.
    pub fn column(&self, v: VertexId) -> Result<impl Iterator<Item = (VertexId, Weight)> + '_> {
        let c = self.check(v)?;
        Ok((0..self.vertex_count)
            .filter_map(move |row| self.cell(row, c).map(|w| (VertexId(row as u32), w))))
    }

    /// Iterate over every occupied cell as `(row, column, weight)`.
    pub fn cells(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        let n = self.vertex_count.max(1);
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|w| (VertexId((i / n) as u32), VertexId((i % n) as u32), w))
        })
    }

    /// Check whether every occupied cell has an equal mirror cell.
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count;
        (0..n).all(|i| (i + 1..n).all(|j| self.cell(i, j) == self.cell(j, i)))
    }

    /// Raw cell read. Any index outside `[0, V)` reads as an empty cell, so a
    /// column past the end can never spill into the next row.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<Weight> {
        let n = self.vertex_count;
        if row >= n || col >= n {
            return None;
        }
        self.cells[row * n + col]
    }

    fn check(&self, v: VertexId) -> Result<usize> {
        let i = v.index();
        if i >= self.vertex_count {
            return Err(GraphError::IndexOutOfRange {
                vertex: v.0,
                vertex_count: self.vertex_count,
            });
        }
        Ok(i)
    }
}

/// Human-readable dump of the matrix, one rule-delimited row per vertex.
///
/// Empty cells print as `-`. The layout is diagnostic only.
impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count;
        let width = self
            .cells
            .iter()
            .map(|c| c.map_or(1, |w| w.to_string().len()))
            .max()
            .unwrap_or(1);
        let rule = "-".repeat((width + 3) * n + 1);

        writeln!(f, "{}", rule)?;
        for row in 0..n {
            for col in 0..n {
                match self.cell(row, col) {
                    Some(w) => write!(f, "| {:>width$} ", w, width = width)?,
                    None => write!(f, "| {:>width$} ", "-", width = width)?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", rule)
    }
}

#[derive(Debug, Clone, Copy)]
enum Insertion {
    Undirected(u32, u32, Weight),
    Arc(u32, u32),
}

/// Builder for matrix graphs.
///
/// Insertions are recorded in order and replayed by [`build`](Self::build),
/// so a later insertion overwrites an earlier one on the same cell.
#[derive(Debug, Default)]
pub struct MatrixGraphBuilder {
    vertex_count: usize,
    insertions: Vec<Insertion>,
}

impl MatrixGraphBuilder {
    /// Create new builder with given number of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            insertions: Vec::new(),
        }
    }

    /// Add undirected weighted edges from slice.
    pub fn with_undirected_edges(mut self, edges: &[(u32, u32, Weight)]) -> Self {
        for &(a, b, w) in edges {
            self.insertions.push(Insertion::Undirected(a, b, w));
        }
        self
    }

    /// Add directed arcs from slice.
    pub fn with_arcs(mut self, arcs: &[(u32, u32)]) -> Self {
        for &(src, dst) in arcs {
            self.insertions.push(Insertion::Arc(src, dst));
        }
        self
    }

    /// Add a single undirected edge.
    pub fn add_undirected_edge(&mut self, a: u32, b: u32, weight: Weight) {
        self.insertions.push(Insertion::Undirected(a, b, weight));
    }

    /// Add a single directed arc.
    pub fn add_arc(&mut self, src: u32, dst: u32) {
        self.insertions.push(Insertion::Arc(src, dst));
    }

    /// Build the matrix graph.
    ///
    /// # Errors
    ///
    /// Fails on the first insertion with an out-of-range vertex.
    pub fn build(self) -> Result<MatrixGraph> {
        let mut graph = MatrixGraph::new(self.vertex_count)?;
        for insertion in self.insertions {
            match insertion {
                Insertion::Undirected(a, b, w) => {
                    graph.add_undirected_edge(VertexId(a), VertexId(b), w)?
                }
                Insertion::Arc(src, dst) => graph.add_directed_arc(VertexId(src), VertexId(dst))?,
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = MatrixGraph::new(0).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.cells().count(), 0);
    }

    #[test]
    fn test_new_graph_has_no_edges() {
        let graph = MatrixGraph::new(4).unwrap();
        for a in graph.vertices() {
            for b in graph.vertices() {
                assert_eq!(graph.edge_weight(a, b).unwrap(), None);
            }
        }
    }

    #[test]
    fn test_capacity_overflow() {
        let result = MatrixGraph::new(usize::MAX);
        assert!(matches!(result, Err(GraphError::CapacityOverflow { .. })));
    }

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut graph = MatrixGraph::new(3).unwrap();
        graph.add_undirected_edge(VertexId(0), VertexId(2), -5).unwrap();

        assert_eq!(graph.edge_weight(VertexId(0), VertexId(2)).unwrap(), Some(-5));
        assert_eq!(graph.edge_weight(VertexId(2), VertexId(0)).unwrap(), Some(-5));
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_max_weight_is_a_real_edge() {
        let mut graph = MatrixGraph::new(2).unwrap();
        graph.add_undirected_edge(VertexId(0), VertexId(1), i32::MAX).unwrap();
        assert_eq!(graph.edge_weight(VertexId(1), VertexId(0)).unwrap(), Some(i32::MAX));
    }

    #[test]
    fn test_directed_arc_is_one_way() {
        let mut graph = MatrixGraph::new(3).unwrap();
        graph.add_directed_arc(VertexId(1), VertexId(2)).unwrap();

        assert!(graph.has_arc(VertexId(1), VertexId(2)).unwrap());
        assert!(!graph.has_arc(VertexId(2), VertexId(1)).unwrap());
        assert_eq!(graph.edge_weight(VertexId(1), VertexId(2)).unwrap(), Some(ARC_WEIGHT));
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn test_out_of_range_leaves_graph_untouched() {
        let mut graph = MatrixGraph::new(3).unwrap();
        let before = graph.clone();

        let err = graph
            .add_undirected_edge(VertexId(1), VertexId(3), 4)
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::IndexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
        assert_eq!(graph, before);

        assert!(graph.add_directed_arc(VertexId(5), VertexId(0)).is_err());
        assert!(graph.edge_weight(VertexId(0), VertexId(9)).is_err());
        assert_eq!(graph, before);
    }

    #[test]
    fn test_row_and_column() {
        let graph = MatrixGraphBuilder::new(4)
            .with_undirected_edges(&[(0, 1, 3), (0, 3, 8)])
            .with_arcs(&[(2, 3)])
            .build()
            .unwrap();

        let row0: Vec<_> = graph.row(VertexId(0)).unwrap().collect();
        assert_eq!(row0, vec![(VertexId(1), 3), (VertexId(3), 8)]);

        let col3: Vec<_> = graph.column(VertexId(3)).unwrap().collect();
        assert_eq!(col3, vec![(VertexId(0), 8), (VertexId(2), ARC_WEIGHT)]);

        assert!(graph.row(VertexId(4)).is_err());
    }

    #[test]
    fn test_cells() {
        let graph = MatrixGraphBuilder::new(3)
            .with_arcs(&[(0, 1), (2, 0)])
            .build()
            .unwrap();

        let cells: Vec<_> = graph.cells().collect();
        assert_eq!(
            cells,
            vec![(VertexId(0), VertexId(1), 1), (VertexId(2), VertexId(0), 1)]
        );
    }

    #[test]
    fn test_builder_overwrites_in_order() {
        let mut builder = MatrixGraphBuilder::new(2);
        builder.add_undirected_edge(0, 1, 10);
        builder.add_undirected_edge(1, 0, 4);

        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_weight(VertexId(0), VertexId(1)).unwrap(), Some(4));
    }

    #[test]
    fn test_builder_rejects_bad_index() {
        let mut builder = MatrixGraphBuilder::new(2);
        builder.add_arc(0, 2);
        assert!(matches!(
            builder.build(),
            Err(GraphError::IndexOutOfRange { vertex: 2, .. })
        ));
    }

    #[test]
    fn test_display_dump() {
        let graph = MatrixGraphBuilder::new(2)
            .with_undirected_edges(&[(0, 1, 12)])
            .build()
            .unwrap();

        let dump = graph.to_string();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "|  - | 12 |");
        assert_eq!(lines[2], "| 12 |  - |");
        assert_eq!(lines[0], lines[3]);
    }
}
