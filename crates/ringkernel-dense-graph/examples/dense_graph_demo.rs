//! Dense graph demo: builds a small weighted graph and a small DAG, dumps
//! both matrices and reports the results through `tracing`.
//!
//! Run with `RUST_LOG=debug` to see per-run algorithm logs.

use ringkernel_dense_graph::{
    compute_order_with_reporter, spanning_tree_with_reporter, DirectedGraph, GraphError,
    MstConfig, TracingReporter, UndirectedGraph,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut reporter = TracingReporter;

    let weighted =
        UndirectedGraph::from_edges(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 4)])?;
    println!("{}", weighted);
    let tree = spanning_tree_with_reporter(&weighted, &MstConfig::default(), &mut reporter)?;
    for (parent, child, weight) in tree.edges() {
        println!("  {} -> {} ({})", parent, child, weight);
    }

    let dag = DirectedGraph::from_arcs(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)])?;
    println!("{}", dag);
    compute_order_with_reporter(&dag, &mut reporter)?;

    // A cycle is reported, not returned as a partial order
    let cyclic = DirectedGraph::from_arcs(3, &[(0, 1), (1, 2), (2, 0)])?;
    if let Err(err) = compute_order_with_reporter(&cyclic, &mut reporter) {
        println!("cyclic graph rejected: {}", err);
    }

    Ok(())
}
