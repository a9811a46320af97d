//! Minimum spanning tree via Prim's algorithm.
//!
//! The dense variant: every round scans all unfinalized vertices for the
//! cheapest connection cost, then relaxes the chosen vertex's matrix row.
//! O(V²) time with no priority queue, which matches the matrix layout.

use tracing::{debug, trace, warn};

use crate::models::{VertexId, Weight, WeightedAdjacency};
use crate::report::{NullReporter, Reporter};
use crate::{GraphError, Result};

/// Spanning tree configuration.
#[derive(Debug, Clone, Default)]
pub struct MstConfig {
    /// Vertex the tree is grown from.
    pub root: VertexId,
}

impl MstConfig {
    /// Create new configuration rooted at vertex 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root vertex.
    pub fn with_root(mut self, root: VertexId) -> Self {
        self.root = root;
        self
    }
}

/// Result of a spanning tree computation.
///
/// Stores one parent pointer and one connection cost per vertex. The root has
/// no parent and cost 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    root: VertexId,
    parent: Vec<Option<VertexId>>,
    cost: Vec<Weight>,
    total_weight: i64,
}

impl SpanningTree {
    /// Root the tree was grown from.
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Sum of all tree edge weights.
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// Number of vertices spanned.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if the tree spans no vertices.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Tree parent of `v`. `None` for the root or an out-of-range vertex.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parent.get(v.index()).copied().flatten()
    }

    /// Weight of the tree edge connecting `v` to its parent (0 for the root).
    pub fn cost(&self, v: VertexId) -> Option<Weight> {
        self.cost.get(v.index()).copied()
    }

    /// Parent pointers indexed by vertex.
    pub fn parents(&self) -> &[Option<VertexId>] {
        &self.parent
    }

    /// Tree edges as `(parent, child, weight)`, ordered by child.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.parent
            .iter()
            .zip(&self.cost)
            .enumerate()
            .filter_map(|(child, (parent, &w))| parent.map(|p| (p, VertexId(child as u32), w)))
    }
}

/// Total weight of the minimum spanning tree rooted at vertex 0.
///
/// # Errors
///
/// Returns [`GraphError::NotConnected`] if some vertex is unreachable from 0.
pub fn compute_mst<G: WeightedAdjacency + ?Sized>(graph: &G) -> Result<i64> {
    spanning_tree(graph).map(|tree| tree.total_weight())
}

/// Minimum spanning tree rooted at vertex 0.
pub fn spanning_tree<G: WeightedAdjacency + ?Sized>(graph: &G) -> Result<SpanningTree> {
    spanning_tree_with_config(graph, &MstConfig::default())
}

/// Minimum spanning tree with configuration.
pub fn spanning_tree_with_config<G: WeightedAdjacency + ?Sized>(
    graph: &G,
    config: &MstConfig,
) -> Result<SpanningTree> {
    spanning_tree_with_reporter(graph, config, &mut NullReporter)
}

/// Minimum spanning tree, passing the outcome to `reporter`.
///
/// The reporter sees either the finished tree or the error; the same value is
/// returned to the caller.
pub fn spanning_tree_with_reporter<G, R>(
    graph: &G,
    config: &MstConfig,
    reporter: &mut R,
) -> Result<SpanningTree>
where
    G: WeightedAdjacency + ?Sized,
    R: Reporter + ?Sized,
{
    let result = prim(graph, config.root);
    match &result {
        Ok(tree) => reporter.spanning_tree(tree),
        Err(err) => reporter.failure(err),
    }
    result
}

fn prim<G: WeightedAdjacency + ?Sized>(graph: &G, root: VertexId) -> Result<SpanningTree> {
    let n = graph.vertex_count();
    debug!(vertices = n, root = root.0, "Computing minimum spanning tree");

    if n == 0 {
        return Ok(SpanningTree {
            root,
            parent: Vec::new(),
            cost: Vec::new(),
            total_weight: 0,
        });
    }

    let r = root.index();
    if r >= n {
        return Err(GraphError::InvalidRoot {
            root: root.0,
            vertex_count: n,
        });
    }

    // None = not yet reachable
    let mut cost: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut known = vec![false; n];
    cost[r] = Some(0);

    for _ in 0..n {
        let Some(u) = cheapest_unknown(&cost, &known) else {
            // Every remaining unknown vertex has infinite cost
            let vertex = known.iter().position(|&k| !k).unwrap_or(0) as u32;
            warn!(vertex, root = root.0, "Spanning tree aborted: graph not connected");
            return Err(GraphError::NotConnected {
                vertex,
                root: root.0,
            });
        };

        known[u] = true;
        trace!(vertex = u, cost = ?cost[u], "Finalized vertex");

        for k in 0..n {
            if known[k] {
                continue;
            }
            if let Some(w) = graph.weight(u, k) {
                if cost[k].map_or(true, |c| w < c) {
                    cost[k] = Some(w);
                    parent[k] = Some(VertexId(u as u32));
                }
            }
        }
    }

    let cost: Vec<Weight> = cost.into_iter().map(|c| c.unwrap_or(0)).collect();
    let total_weight: i64 = cost.iter().map(|&c| i64::from(c)).sum();
    debug!(total_weight, "Minimum spanning tree complete");

    Ok(SpanningTree {
        root,
        parent,
        cost,
        total_weight,
    })
}

/// Unknown vertex with the lowest finite cost; the first one wins ties.
fn cheapest_unknown(cost: &[Option<Weight>], known: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, Weight)> = None;
    for (i, (&c, &k)) in cost.iter().zip(known).enumerate() {
        if k {
            continue;
        }
        if let Some(c) = c {
            if best.map_or(true, |(_, b)| c < b) {
                best = Some((i, c));
            }
        }
    }
    best.map(|(i, _)| i)
}
