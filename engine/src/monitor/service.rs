use std::error::Error;
use std::time::Duration;

use log::info;

use crate::dijkstra::model::RouteQuery;
use crate::dijkstra::server::RouteServer;
use crate::graph::topology::RoadTopology;
use crate::graph::{Timestamp, Weight};
use crate::io::NetworkConfig;
use crate::monitor::segment::RoadSegment;
use crate::monitor::snapshot::{EdgeView, GraphSnapshot, NodeView};
use crate::monitor::store::SegmentStore;
use crate::sampling::density::DensityEstimator;

/// The engine behind the query interface: topology, segment store, density
/// estimator and routing scratch state. Stateless between queries apart from
/// the store and its refresh state; every query sees a graph assembled from
/// exactly one refresh cycle.
pub struct TrafficService {
    topology: RoadTopology,
    store: SegmentStore,
    estimator: Box<dyn DensityEstimator>,
    router: RouteServer,
}

impl TrafficService {
    pub fn new(topology: RoadTopology, store: SegmentStore, estimator: Box<dyn DensityEstimator>) -> TrafficService {
        assert_eq!(topology.num_segments(), store.num_segments());
        let num_nodes = topology.num_nodes();
        TrafficService { topology, store, estimator, router: RouteServer::new(num_nodes) }
    }

    /// Build the service from a network description. Topology-level invariant
    /// violations are fatal here; missing frame sources are not, the affected
    /// segments degrade to permanently absent cursors with weight 0.
    pub fn from_config(config: &NetworkConfig, estimator: Box<dyn DensityEstimator>) -> Result<TrafficService, Box<dyn Error>> {
        let topology = RoadTopology::new(
            config.nodes.clone(),
            config
                .segments
                .iter()
                .map(|segment| (segment.id.clone(), segment.from.clone(), segment.to.clone()))
                .collect(),
            (config.route.source.clone(), config.route.target.clone()),
        )?;

        let segments = config
            .segments
            .iter()
            .map(|segment| RoadSegment::new(segment.id.clone(), segment.source.open_cursor()))
            .collect();

        let store = SegmentStore::new(segments, Duration::from_secs(config.refresh_interval_secs));
        info!(
            "initialized service: {} nodes, {} segments, refresh every {} s",
            topology.num_nodes(),
            store.num_segments(),
            config.refresh_interval_secs
        );

        Ok(TrafficService::new(topology, store, estimator))
    }

    pub fn topology(&self) -> &RoadTopology {
        &self.topology
    }

    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    /// Answer one external query: refresh if due, assemble the graph snapshot
    /// of the current cycle and route between the configured endpoints.
    pub fn graph_data(&mut self, now: Timestamp) -> GraphSnapshot {
        if self.store.should_refresh(now) {
            self.store.refresh_all(self.estimator.as_ref(), now);
        }

        let weights = self.store.weights();
        let graph = self.topology.build_graph(&weights);

        let query = RouteQuery::new(self.topology.source(), self.topology.target());
        let best_route = self
            .router
            .query(&graph, query)
            .map(|result| self.node_labels(&result.path.node_path));

        let nodes = (0..self.topology.num_nodes() as u32)
            .map(|node| NodeView {
                id: self.topology.node_label(node).to_string(),
                label: self.topology.node_label(node).to_string(),
            })
            .collect();

        let edges = (0..self.topology.num_segments())
            .map(|segment| {
                let (tail, head) = self.topology.segment_endpoints(segment);
                EdgeView {
                    from: self.topology.node_label(tail).to_string(),
                    to: self.topology.node_label(head).to_string(),
                    weight: weights[segment],
                    label: weights[segment].to_string(),
                }
            })
            .collect();

        GraphSnapshot {
            nodes,
            edges,
            best_route,
            min_weight: weights.iter().min().copied().unwrap_or(0),
            max_weight: weights.iter().max().copied().unwrap_or(1),
            timestamp: now as f64 / 1000.0,
            next_update: self.store.seconds_until_next_refresh(now),
        }
    }

    /// Ad-hoc route between two labelled nodes over the current cycle's
    /// graph, refreshing first if due. `None` when a label is unknown or no
    /// path exists.
    pub fn route_between(&mut self, from: &str, to: &str, now: Timestamp) -> Option<(Vec<String>, Weight)> {
        if self.store.should_refresh(now) {
            self.store.refresh_all(self.estimator.as_ref(), now);
        }

        let query = RouteQuery::new(self.topology.node_id(from)?, self.topology.node_id(to)?);
        let graph = self.topology.build_graph(&self.store.weights());

        self.router
            .query(&graph, query)
            .map(|result| (self.node_labels(&result.path.node_path), result.distance))
    }

    /// Release all frame sources. Called on shutdown.
    pub fn close(&mut self) {
        self.store.close_all();
    }

    fn node_labels(&self, node_path: &[u32]) -> Vec<String> {
        node_path.iter().map(|&node| self.topology.node_label(node).to_string()).collect()
    }
}
