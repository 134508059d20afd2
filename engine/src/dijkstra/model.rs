use crate::graph::{EdgeId, NodeId, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuery {
    pub from: NodeId,
    pub to: NodeId,
}

impl RouteQuery {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone)]
pub struct PathResult {
    pub node_path: Vec<NodeId>,
    pub edge_path: Vec<EdgeId>,
}

impl PathResult {
    pub fn new(node_path: Vec<NodeId>, edge_path: Vec<EdgeId>) -> Self {
        Self { node_path, edge_path }
    }
}

#[derive(Debug, Clone)]
pub struct QueryResult {
    pub distance: Weight,
    pub path: PathResult,
}

impl QueryResult {
    pub fn new(distance: Weight, path: PathResult) -> Self {
        Self { distance, path }
    }
}
