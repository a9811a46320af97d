//! Kruskal's minimum spanning tree weight over a dense matrix.
//!
//! Independent of the Prim implementation: edges are read from the upper
//! triangle, sorted by weight and joined through a small disjoint-set forest.
//! Useful as a cross-check for [`compute_mst`](super::mst::compute_mst).

use tracing::debug;

use crate::models::{Weight, WeightedAdjacency};
use crate::{GraphError, Result};

/// Disjoint-set forest over `0..n`, union by size with path halving.
#[derive(Debug)]
struct Forest {
    parent: Vec<usize>,
    size: Vec<usize>,
    trees: usize,
}

impl Forest {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            trees: n,
        }
    }

    fn root(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            self.parent[v] = self.parent[self.parent[v]];
            v = self.parent[v];
        }
        v
    }

    /// Join the trees holding `a` and `b`. False if they already share one.
    fn join(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.root(a), self.root(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.trees -= 1;
        true
    }
}

/// Total minimum spanning tree weight computed with Kruskal's algorithm.
///
/// Only the upper triangle (`u < v`) is read, so the graph is assumed
/// symmetric. Self-loops never join two trees and are skipped.
///
/// # Errors
///
/// Returns [`GraphError::NotConnected`] if the result is a forest with more
/// than one tree. The reported vertex is the lowest index outside vertex 0's
/// tree.
pub fn kruskal_weight<G: WeightedAdjacency + ?Sized>(graph: &G) -> Result<i64> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(0);
    }

    let mut edges: Vec<(Weight, usize, usize)> = (0..n)
        .flat_map(|u| (u + 1..n).filter_map(move |v| graph.weight(u, v).map(|w| (w, u, v))))
        .collect();
    edges.sort_unstable();

    let mut forest = Forest::new(n);
    let mut total = 0i64;
    for (w, u, v) in edges {
        if forest.join(u, v) {
            total += i64::from(w);
            if forest.trees == 1 {
                break;
            }
        }
    }

    if forest.trees > 1 {
        let home = forest.root(0);
        let vertex = (1..n).find(|&v| forest.root(v) != home).unwrap_or(0) as u32;
        return Err(GraphError::NotConnected { vertex, root: 0 });
    }

    debug!(vertices = n, total_weight = total, "Kruskal spanning tree complete");
    Ok(total)
}
