//! Topological ordering via Kahn's algorithm.
//!
//! In-degrees are counted column by column, zero in-degree vertices seed a
//! FIFO queue in ascending index order, and each dequeued vertex releases the
//! targets of its row. Vertices that never reach in-degree zero sit on or
//! behind a cycle, which is reported instead of a truncated order.
//!
//! Given the same matrix the output is always the same: seeding is ascending
//! and the queue is FIFO.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::models::{ArcAdjacency, VertexId};
use crate::report::{NullReporter, Reporter};
use crate::{GraphError, Result};

/// Number of arcs entering each vertex.
pub fn in_degrees<G: ArcAdjacency + ?Sized>(graph: &G) -> Vec<usize> {
    let n = graph.vertex_count();
    (0..n)
        .map(|v| (0..n).filter(|&row| graph.has_arc(row, v)).count())
        .collect()
}

/// Topological order of all vertices.
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] listing the vertices that could not
/// be ordered.
pub fn compute_order<G: ArcAdjacency + ?Sized>(graph: &G) -> Result<Vec<VertexId>> {
    compute_order_with_reporter(graph, &mut NullReporter)
}

/// Topological order, passing the outcome to `reporter`.
pub fn compute_order_with_reporter<G, R>(graph: &G, reporter: &mut R) -> Result<Vec<VertexId>>
where
    G: ArcAdjacency + ?Sized,
    R: Reporter + ?Sized,
{
    let result = kahn(graph);
    match &result {
        Ok(order) => reporter.topological_order(order),
        Err(err) => reporter.failure(err),
    }
    result
}

fn kahn<G: ArcAdjacency + ?Sized>(graph: &G) -> Result<Vec<VertexId>> {
    let n = graph.vertex_count();
    debug!(vertices = n, "Computing topological order");

    let mut in_degree = in_degrees(graph);
    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        order.push(VertexId(u as u32));

        for v in 0..n {
            if graph.has_arc(u, v) {
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    queue.push_back(v);
                }
            }
        }
    }

    if order.len() < n {
        let remaining: Vec<VertexId> = (0..n)
            .filter(|&v| in_degree[v] > 0)
            .map(|v| VertexId(v as u32))
            .collect();
        warn!(
            ordered = order.len(),
            remaining = remaining.len(),
            "Topological sort aborted: cycle detected"
        );
        return Err(GraphError::CycleDetected { remaining });
    }

    debug!(vertices = n, "Topological order complete");
    Ok(order)
}

/// Check that `order` lists every vertex exactly once and that every arc
/// points from an earlier to a later position.
pub fn is_topological_order<G: ArcAdjacency + ?Sized>(graph: &G, order: &[VertexId]) -> bool {
    let n = graph.vertex_count();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (i, v) in order.iter().enumerate() {
        match position.get_mut(v.index()) {
            Some(slot) if *slot == usize::MAX => *slot = i,
            _ => return false,
        }
    }

    (0..n).all(|u| (0..n).all(|v| !graph.has_arc(u, v) || position[u] < position[v]))
}
