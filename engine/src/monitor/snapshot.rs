use serde::Serialize;

use crate::graph::Weight;

/// Wire model of one refreshed query: the current graph, the best route and
/// the weight range for frontend normalization. Field names follow the
/// `/api/graph_data` payload consumed by the visualization frontends.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    /// `None` when no route exists; fallback policy is the caller's choice.
    pub best_route: Option<Vec<String>>,
    pub min_weight: Weight,
    pub max_weight: Weight,
    /// Unix seconds of the query.
    pub timestamp: f64,
    /// Whole seconds until the next refresh is due.
    pub next_update: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub weight: Weight,
    pub label: String,
}
