// src/graph/mod.rs
//! City locality graph: state grouping, windowed edges and BFS expansion.
//!
//! Cities are linked to the next few cities first seen in the same state.
//! The links are a proximity heuristic, not geography, which is why the
//! edge rule sits behind [`EdgeRule`] and is applied separately from the
//! grouping step.

pub mod edges;
pub mod grouping;
pub mod locality;
pub mod traversal;

pub use edges::{build_edges, EdgeRule, ForwardWindow};
pub use grouping::StateCityIndex;
pub use locality::LocalityGraph;
pub use traversal::nearby_cities;

use crate::types::PropertyRecord;

/// Orchestrates grouping, edge construction and graph assembly.
pub struct GraphEngine;

impl GraphEngine {
    /// Builds the locality graph with a forward window of `window` cities.
    #[must_use]
    pub fn build(records: &[PropertyRecord], window: usize) -> LocalityGraph {
        Self::build_with(records, &ForwardWindow::new(window))
    }

    /// Builds the locality graph with an arbitrary edge rule.
    #[must_use]
    pub fn build_with<R: EdgeRule + ?Sized>(records: &[PropertyRecord], rule: &R) -> LocalityGraph {
        let index = StateCityIndex::from_records(records);
        let edges = build_edges(&index, rule);
        let mut graph = LocalityGraph::with_cities(index.cities());
        for (a, b) in &edges {
            graph.connect(a, b);
        }
        tracing::debug!(
            states = index.state_count(),
            cities = graph.city_count(),
            edges = graph.edge_count(),
            "built locality graph"
        );
        graph
    }
}
