//! Integration tests for spanning trees and topological sort on random dense graphs.

use rand::prelude::*;
use rand::rngs::StdRng;
use ringkernel_dense_graph::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Connected graph: a random spanning path plus random extra edges.
fn random_connected(rng: &mut StdRng, n: usize, density: f64) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(n).expect("allocate graph");

    let mut perm: Vec<u32> = (0..n as u32).collect();
    perm.shuffle(rng);
    for pair in perm.windows(2) {
        let w = rng.gen_range(-50..50);
        graph
            .add_edge(VertexId(pair[0]), VertexId(pair[1]), w)
            .expect("in range");
    }

    for a in 0..n as u32 {
        for b in a + 1..n as u32 {
            if rng.gen_bool(density) {
                let w = rng.gen_range(-50..50);
                graph.add_edge(VertexId(a), VertexId(b), w).expect("in range");
            }
        }
    }
    graph
}

/// DAG whose arcs all follow a hidden random permutation.
fn random_dag(rng: &mut StdRng, n: usize, density: f64) -> DirectedGraph {
    let mut rank: Vec<u32> = (0..n as u32).collect();
    rank.shuffle(rng);

    let mut graph = DirectedGraph::new(n).expect("allocate graph");
    for i in 0..n {
        for j in i + 1..n {
            if rng.gen_bool(density) {
                graph
                    .add_arc(VertexId(rank[i]), VertexId(rank[j]))
                    .expect("in range");
            }
        }
    }
    graph
}

#[test]
fn test_prim_matches_kruskal_on_random_graphs() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let n = rng.gen_range(1..20);
        let graph = random_connected(&mut rng, n, 0.3);

        let prim = compute_mst(&graph).expect("connected");
        let kruskal = kruskal_weight(&graph).expect("connected");
        assert_eq!(prim, kruskal, "graph:\n{}", graph);
    }
}

#[test]
fn test_weight_independent_of_root() {
    let mut rng = StdRng::seed_from_u64(17);
    let graph = random_connected(&mut rng, 12, 0.4);
    let expected = compute_mst(&graph).unwrap();

    for root in 0..12u32 {
        let config = MstConfig::new().with_root(VertexId(root));
        let tree = spanning_tree_with_config(&graph, &config).unwrap();
        assert_eq!(tree.total_weight(), expected);
    }
}

#[test]
fn test_tree_edges_exist_in_graph() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_connected(&mut rng, 15, 0.25);
    let tree = spanning_tree(&graph).unwrap();

    let edges: Vec<_> = tree.edges().collect();
    assert_eq!(edges.len(), 14);

    let mut sum = 0i64;
    for (parent, child, w) in edges {
        assert_eq!(graph.edge_weight(parent, child).unwrap(), Some(w));
        sum += i64::from(w);
    }
    assert_eq!(sum, tree.total_weight());
}

#[test]
fn test_split_graph_not_connected() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut graph = UndirectedGraph::new(10).unwrap();

    // Two cliques: {0..5} and {5..10}
    for (lo, hi) in [(0u32, 5u32), (5, 10)] {
        for a in lo..hi {
            for b in a + 1..hi {
                graph
                    .add_edge(VertexId(a), VertexId(b), rng.gen_range(1..10))
                    .unwrap();
            }
        }
    }

    assert_eq!(
        compute_mst(&graph),
        Err(GraphError::NotConnected { vertex: 5, root: 0 })
    );
    assert!(kruskal_weight(&graph).is_err());
}

#[test]
fn test_random_dags_are_ordered() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let n = rng.gen_range(0..25);
        let graph = random_dag(&mut rng, n, 0.2);

        let order = compute_order(&graph).expect("acyclic");
        assert_eq!(order.len(), n);
        assert!(is_topological_order(&graph, &order));
    }
}

#[test]
fn test_order_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_dag(&mut rng, 20, 0.3);

    let first = compute_order(&graph).unwrap();
    for _ in 0..5 {
        assert_eq!(compute_order(&graph).unwrap(), first);
    }
}

#[test]
fn test_back_arc_creates_cycle() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let n = rng.gen_range(2..15);
        let mut graph = random_dag(&mut rng, n, 0.3);
        let order = compute_order(&graph).unwrap();

        // Close a path: chain the order, then point the last vertex back at the first
        for pair in order.windows(2) {
            graph.add_arc(pair[0], pair[1]).unwrap();
        }
        graph.add_arc(order[n - 1], order[0]).unwrap();

        match compute_order(&graph) {
            Err(GraphError::CycleDetected { remaining }) => assert_eq!(remaining.len(), n),
            other => panic!("expected cycle, got {:?}", other),
        }
    }
}

#[test]
fn test_one_matrix_two_views() {
    // The raw matrix serves both algorithms when the caller keeps them apart
    let mut matrix = MatrixGraph::new(3).unwrap();
    matrix.add_undirected_edge(VertexId(0), VertexId(1), 4).unwrap();
    matrix.add_undirected_edge(VertexId(1), VertexId(2), 6).unwrap();
    assert_eq!(compute_mst(&matrix).unwrap(), 10);

    // Weighted cells are not arcs, so every vertex is a source
    assert_eq!(
        compute_order(&matrix).unwrap(),
        vec![VertexId(0), VertexId(1), VertexId(2)]
    );
}

#[test]
fn test_tracing_reporter_end_to_end() {
    init_tracing();
    let graph =
        UndirectedGraph::from_edges(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 4)]).unwrap();
    let mut reporter = TracingReporter;

    let tree = spanning_tree_with_reporter(&graph, &MstConfig::default(), &mut reporter).unwrap();
    assert_eq!(tree.total_weight(), 4);

    let dag = DirectedGraph::from_arcs(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]).unwrap();
    let order = compute_order_with_reporter(&dag, &mut reporter).unwrap();
    assert!(is_topological_order(&dag, &order));
}
