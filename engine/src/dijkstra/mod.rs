use crate::datastr::index_heap::{IndexdMinHeap, Indexing};
use crate::graph::{NodeId, Weight, INFINITY};

pub mod model;
pub mod server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub distance: Weight,
    pub node: NodeId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.cmp(&other.distance).then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Indexing for State {
    fn as_index(&self) -> usize {
        self.node as usize
    }
}

/// Reusable per-query scratch state: tentative distances, predecessor tree
/// and the queue. Sized once for the node count, reset on every query.
pub struct DijkstraData {
    pub distances: Vec<Weight>,
    pub predecessors: Vec<NodeId>,
    pub queue: IndexdMinHeap<State>,
}

impl DijkstraData {
    pub fn new(num_nodes: usize) -> DijkstraData {
        DijkstraData {
            distances: vec![INFINITY; num_nodes],
            predecessors: vec![num_nodes as NodeId; num_nodes],
            queue: IndexdMinHeap::new(num_nodes),
        }
    }

    pub fn reset(&mut self) {
        self.distances.iter_mut().for_each(|dist| *dist = INFINITY);
        self.queue.clear();
    }
}
