use std::error::Error;
use std::fmt;

use crate::graph::traffic_graph::TrafficGraph;
use crate::graph::{NodeId, Weight};

/// Violation of a topology-level invariant. Always fatal at initialization.
#[derive(Debug)]
pub struct TopologyError(pub String);

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid topology: {}", self.0)
    }
}

impl Error for TopologyError {}

/// Immutable shape of the monitored road network: node labels, undirected
/// segment endpoints and the designated routing pair. Segment weights live
/// elsewhere; the topology never changes during the process lifetime.
pub struct RoadTopology {
    node_labels: Vec<String>,
    segment_ids: Vec<String>,
    segment_endpoints: Vec<(NodeId, NodeId)>,
    source: NodeId,
    target: NodeId,
}

impl RoadTopology {
    /// Build and validate a topology from `(segment_id, from_label, to_label)`
    /// triples plus a `(source, target)` routing pair.
    pub fn new(
        node_labels: Vec<String>,
        segments: Vec<(String, String, String)>,
        route: (String, String),
    ) -> Result<RoadTopology, TopologyError> {
        let node_id = |label: &str| -> Result<NodeId, TopologyError> {
            node_labels
                .iter()
                .position(|n| n == label)
                .map(|idx| idx as NodeId)
                .ok_or_else(|| TopologyError(format!("unknown node `{}`", label)))
        };

        let mut segment_ids = Vec::with_capacity(segments.len());
        let mut segment_endpoints = Vec::with_capacity(segments.len());

        for (id, from, to) in &segments {
            let tail = node_id(from)?;
            let head = node_id(to)?;

            if tail == head {
                return Err(TopologyError(format!("segment `{}` is a self-loop", id)));
            }

            // multi-edges are unsupported, in either direction
            let duplicate = segment_endpoints
                .iter()
                .any(|&(u, v)| (u, v) == (tail, head) || (u, v) == (head, tail));
            if duplicate {
                return Err(TopologyError(format!(
                    "segment `{}` duplicates the pair ({}, {})",
                    id, from, to
                )));
            }

            segment_ids.push(id.clone());
            segment_endpoints.push((tail, head));
        }

        let source = node_id(&route.0)?;
        let target = node_id(&route.1)?;

        Ok(RoadTopology { node_labels, segment_ids, segment_endpoints, source, target })
    }

    pub fn num_nodes(&self) -> usize {
        self.node_labels.len()
    }

    pub fn num_segments(&self) -> usize {
        self.segment_ids.len()
    }

    pub fn node_label(&self, node: NodeId) -> &str {
        &self.node_labels[node as usize]
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.node_labels.iter().position(|n| n == label).map(|idx| idx as NodeId)
    }

    pub fn segment_id(&self, segment: usize) -> &str {
        &self.segment_ids[segment]
    }

    pub fn segment_endpoints(&self, segment: usize) -> (NodeId, NodeId) {
        self.segment_endpoints[segment]
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Assemble an ephemeral weighted graph from this topology and the given
    /// per-segment weights. Deterministic and side-effect free: identical
    /// inputs always yield identical adjacency arrays. A segment without a
    /// weight entry contributes weight 0 (no known congestion), never a
    /// missing edge.
    pub fn build_graph(&self, weights: &[Weight]) -> TrafficGraph {
        let mut arcs: Vec<(NodeId, NodeId, usize)> = Vec::with_capacity(2 * self.segment_endpoints.len());
        for (segment, &(tail, head)) in self.segment_endpoints.iter().enumerate() {
            arcs.push((tail, head, segment));
            arcs.push((head, tail, segment));
        }
        arcs.sort_unstable_by_key(|&(tail, head, _)| (tail, head));

        let mut degree = vec![0u32; self.num_nodes()];
        let mut head = Vec::with_capacity(arcs.len());
        let mut weight = Vec::with_capacity(arcs.len());
        let mut segment = Vec::with_capacity(arcs.len());

        arcs.iter().for_each(|&(arc_tail, arc_head, arc_segment)| {
            degree[arc_tail as usize] += 1;
            head.push(arc_head);
            weight.push(weights.get(arc_segment).copied().unwrap_or(0));
            segment.push(arc_segment as u32);
        });

        let mut first_out = vec![0];
        degree.iter().for_each(|&deg| first_out.push(*first_out.last().unwrap() + deg));

        TrafficGraph::new(first_out, head, weight, segment)
    }
}
