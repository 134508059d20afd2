use std::ops::Range;

use crate::graph::{EdgeId, Graph, Link, LinkIterable, NodeId, Weight};

/// Adjacency-array representation of one refresh cycle's road network.
/// Each undirected segment appears as two directed arcs sharing one weight;
/// `segment` maps every arc back to its originating segment index.
pub struct TrafficGraph {
    first_out: Vec<EdgeId>,
    head: Vec<NodeId>,
    weight: Vec<Weight>,
    segment: Vec<u32>,
}

impl TrafficGraph {
    /// Create a new `TrafficGraph` from the given adjacency containers.
    pub fn new(first_out: Vec<EdgeId>, head: Vec<NodeId>, weight: Vec<Weight>, segment: Vec<u32>) -> TrafficGraph {
        assert!(!first_out.is_empty() && first_out.len() < <NodeId>::MAX as usize);
        assert_eq!(first_out.first(), Some(&0));
        assert_eq!(first_out.last(), Some(&(head.len() as u32)));
        assert_eq!(weight.len(), head.len());
        assert_eq!(segment.len(), head.len());

        TrafficGraph { first_out, head, weight, segment }
    }

    pub fn first_out(&self) -> &[EdgeId] {
        &self.first_out
    }

    pub fn head(&self) -> &[NodeId] {
        &self.head
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weight
    }

    pub fn edge_head(&self, edge_id: EdgeId) -> NodeId {
        self.head[edge_id as usize]
    }

    pub fn edge_weight(&self, edge_id: EdgeId) -> Weight {
        self.weight[edge_id as usize]
    }

    pub fn edge_segment(&self, edge_id: EdgeId) -> usize {
        self.segment[edge_id as usize] as usize
    }

    pub fn get_edge_id(&self, start: NodeId, end: NodeId) -> Option<EdgeId> {
        let start = start as usize;

        for i in self.first_out[start]..self.first_out[start + 1] {
            if self.head[i as usize] == end {
                return Some(i);
            }
        }

        None
    }

    fn neighbor_range(&self, node: NodeId) -> Range<usize> {
        let node = node as usize;
        self.first_out[node] as usize..self.first_out[node + 1] as usize
    }
}

impl Graph for TrafficGraph {
    fn num_nodes(&self) -> usize {
        self.first_out.len() - 1
    }

    fn num_arcs(&self) -> usize {
        self.head.len()
    }

    fn degree(&self, node: NodeId) -> usize {
        let node = node as usize;
        assert!(node < self.num_nodes());
        (self.first_out[node + 1] - self.first_out[node]) as usize
    }
}

impl LinkIterable<Link> for TrafficGraph {
    #[allow(clippy::type_complexity)]
    type Iter<'a> =
        std::iter::Map<std::iter::Zip<std::slice::Iter<'a, NodeId>, std::slice::Iter<'a, Weight>>, fn((&NodeId, &Weight)) -> Link>
    where
        Self: 'a;

    #[inline]
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_> {
        let range = self.neighbor_range(node);
        self.head[range.clone()]
            .iter()
            .zip(self.weight[range].iter())
            .map(|(&node, &weight)| Link { node, weight })
    }
}
