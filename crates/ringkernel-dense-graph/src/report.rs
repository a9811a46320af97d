//! Result reporting.
//!
//! Algorithms never print. Callers that want to observe results pass a
//! [`Reporter`] to the `*_with_reporter` entry points:
//! - [`NullReporter`]: discards everything
//! - [`TracingReporter`]: emits `tracing` events
//! - [`RecordingReporter`]: keeps every outcome in memory

use tracing::{info, warn};

use crate::algorithms::mst::SpanningTree;
use crate::models::{VertexId, Weight};
use crate::GraphError;

/// Sink for algorithm outcomes.
///
/// All methods default to doing nothing.
pub trait Reporter {
    /// A spanning tree was computed.
    fn spanning_tree(&mut self, _tree: &SpanningTree) {}

    /// A topological order was computed.
    fn topological_order(&mut self, _order: &[VertexId]) {}

    /// A computation failed.
    fn failure(&mut self, _error: &GraphError) {}
}

/// Reporter that ignores all outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that logs outcomes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn spanning_tree(&mut self, tree: &SpanningTree) {
        info!(
            root = tree.root().0,
            vertices = tree.len(),
            total_weight = tree.total_weight(),
            "Minimum spanning tree"
        );
    }

    fn topological_order(&mut self, order: &[VertexId]) {
        let rendered: Vec<String> = order.iter().map(ToString::to_string).collect();
        info!(order = %rendered.join(" | "), "Topological order");
    }

    fn failure(&mut self, error: &GraphError) {
        warn!(%error, "Graph computation failed");
    }
}

/// A recorded outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Spanning tree summary.
    SpanningTree {
        /// Root vertex.
        root: VertexId,
        /// Sum of tree edge weights.
        total_weight: i64,
        /// Tree edges as `(parent, child, weight)`.
        edges: Vec<(VertexId, VertexId, Weight)>,
    },
    /// Computed topological order.
    TopologicalOrder(Vec<VertexId>),
    /// Failed computation.
    Failure(GraphError),
}

/// Reporter that stores every outcome.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Vec<Report>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes in the order they were reported.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Take the recorded outcomes, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }
}

impl Reporter for RecordingReporter {
    fn spanning_tree(&mut self, tree: &SpanningTree) {
        self.reports.push(Report::SpanningTree {
            root: tree.root(),
            total_weight: tree.total_weight(),
            edges: tree.edges().collect(),
        });
    }

    fn topological_order(&mut self, order: &[VertexId]) {
        self.reports.push(Report::TopologicalOrder(order.to_vec()));
    }

    fn failure(&mut self, error: &GraphError) {
        self.reports.push(Report::Failure(error.clone()));
    }
}
