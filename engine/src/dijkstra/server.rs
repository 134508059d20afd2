use crate::datastr::index_heap::Indexing;
use crate::dijkstra::model::{PathResult, QueryResult, RouteQuery};
use crate::dijkstra::{DijkstraData, State};
use crate::graph::traffic_graph::TrafficGraph;
use crate::graph::{Graph, LinkIterable, Weight};

/// Shortest-weighted-path queries over a graph snapshot. The server only owns
/// reusable scratch state; the graph itself is rebuilt per refresh cycle and
/// passed in by reference.
pub struct RouteServer {
    dijkstra: DijkstraData,
}

impl RouteServer {
    pub fn new(num_nodes: usize) -> RouteServer {
        RouteServer { dijkstra: DijkstraData::new(num_nodes) }
    }

    /// Computes the minimum-total-weight path for the given query. `None` is
    /// the explicit no-path result (endpoint outside the graph, or the target
    /// unreachable); the server never invents a fallback path.
    pub fn query(&mut self, graph: &TrafficGraph, query: RouteQuery) -> Option<QueryResult> {
        let distance = self.distance(graph, query)?;
        let path = self.path(graph, query);
        Some(QueryResult::new(distance, path))
    }

    pub fn distance(&mut self, graph: &TrafficGraph, query: RouteQuery) -> Option<Weight> {
        let RouteQuery { from, to } = query;
        if from as usize >= graph.num_nodes() || to as usize >= graph.num_nodes() {
            return None;
        }

        self.dijkstra.reset();
        self.dijkstra.distances[from as usize] = 0;
        self.dijkstra.queue.push(State { distance: 0, node: from });

        while let Some(State { distance, node }) = self.dijkstra.queue.pop() {
            if node == to {
                return Some(distance);
            }

            for link in graph.link_iter(node) {
                let tentative = distance + link.weight;
                if tentative < self.dijkstra.distances[link.node as usize] {
                    self.dijkstra.distances[link.node as usize] = tentative;
                    self.dijkstra.predecessors[link.node as usize] = node;

                    let state = State { distance: tentative, node: link.node };
                    if self.dijkstra.queue.contains_index(state.as_index()) {
                        self.dijkstra.queue.decrease_key(state);
                    } else {
                        self.dijkstra.queue.push(state);
                    }
                }
            }
        }

        None
    }

    /// Reconstructs the path of the last successful `distance` run by walking
    /// the predecessor tree backwards.
    pub fn path(&self, graph: &TrafficGraph, query: RouteQuery) -> PathResult {
        let mut node_path = vec![query.to];

        while *node_path.last().unwrap() != query.from {
            let next = self.dijkstra.predecessors[*node_path.last().unwrap() as usize];
            node_path.push(next);
        }
        node_path.reverse();

        let edge_path = node_path
            .windows(2)
            .map(|arc| graph.get_edge_id(arc[0], arc[1]).unwrap())
            .collect();

        PathResult::new(node_path, edge_path)
    }

    pub fn path_distance(&self, graph: &TrafficGraph, path: &PathResult) -> Weight {
        path.edge_path.iter().map(|&edge_id| graph.edge_weight(edge_id)).sum()
    }
}
