use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use image::{DynamicImage, RgbImage};

use traffic_router::graph::topology::RoadTopology;
use traffic_router::io::NetworkConfig;
use traffic_router::monitor::segment::RoadSegment;
use traffic_router::monitor::service::TrafficService;
use traffic_router::monitor::store::SegmentStore;
use traffic_router::sampling::density::{DensityEstimator, UniformDensity};
use traffic_router::sampling::frame_cursor::FrameCursor;
use traffic_router::sampling::Frame;

fn line_service(estimator: Box<dyn DensityEstimator>) -> TrafficService {
    let topology = RoadTopology::new(
        vec!["Start".to_string(), "A".to_string(), "End".to_string()],
        vec![
            ("Start_A".to_string(), "Start".to_string(), "A".to_string()),
            ("A_End".to_string(), "A".to_string(), "End".to_string()),
        ],
        ("Start".to_string(), "End".to_string()),
    )
    .unwrap();

    let segments = vec![
        RoadSegment::new("Start_A".to_string(), FrameCursor::still(DynamicImage::ImageRgb8(RgbImage::new(4, 4)))),
        RoadSegment::new("A_End".to_string(), FrameCursor::still(DynamicImage::ImageRgb8(RgbImage::new(4, 4)))),
    ];
    let store = SegmentStore::new(segments, Duration::from_secs(2));

    TrafficService::new(topology, store, estimator)
}

#[test]
fn snapshot_reflects_one_refresh_cycle() {
    let mut service = line_service(Box::new(UniformDensity(3)));
    let snapshot = service.graph_data(5_000);

    assert_eq!(snapshot.edges.len(), 2);
    for edge in &snapshot.edges {
        assert_eq!(edge.weight, 3);
        assert_eq!(edge.label, "3");
    }
    assert_eq!(snapshot.best_route, Some(vec!["Start".to_string(), "A".to_string(), "End".to_string()]));
    assert_eq!(snapshot.min_weight, 3);
    assert_eq!(snapshot.max_weight, 3);
    assert_eq!(snapshot.timestamp, 5.0);
    assert_eq!(snapshot.next_update, 2);
}

#[test]
fn queries_inside_the_window_reuse_the_cycle() {
    struct CountingEstimator(AtomicU32);
    impl DensityEstimator for CountingEstimator {
        fn estimate(&self, _frame: &Frame) -> u32 {
            self.0.fetch_add(1, Ordering::SeqCst) + 1
        }
    }

    let mut service = line_service(Box::new(CountingEstimator(AtomicU32::new(0))));

    let first = service.graph_data(5_000);
    // 500 ms later: still inside the debounce window, no re-sampling
    let second = service.graph_data(5_500);
    assert_eq!(first.edges[0].weight, second.edges[0].weight);
    assert_eq!(second.next_update, 1);

    // past the window: a new cycle with new samples
    let third = service.graph_data(7_000);
    assert_ne!(first.edges[0].weight, third.edges[0].weight);
}

#[test]
fn no_route_is_reported_not_invented() {
    let topology = RoadTopology::new(
        vec!["Start".to_string(), "A".to_string(), "End".to_string()],
        vec![("Start_A".to_string(), "Start".to_string(), "A".to_string())],
        ("Start".to_string(), "End".to_string()),
    )
    .unwrap();
    let store = SegmentStore::new(
        vec![RoadSegment::new("Start_A".to_string(), FrameCursor::unavailable())],
        Duration::from_secs(2),
    );
    let mut service = TrafficService::new(topology, store, Box::new(UniformDensity(1)));

    let snapshot = service.graph_data(5_000);
    assert_eq!(snapshot.best_route, None);
}

#[test]
fn route_between_arbitrary_labels() {
    let mut service = line_service(Box::new(UniformDensity(2)));

    let (route, weight) = service.route_between("End", "Start", 5_000).unwrap();
    assert_eq!(route, vec!["End".to_string(), "A".to_string(), "Start".to_string()]);
    assert_eq!(weight, 4);

    assert!(service.route_between("Start", "Nowhere", 5_000).is_none());
}

#[test]
fn demo_network_initializes_without_any_imagery() {
    // none of the demo image files exist here: every cursor degrades to
    // Unavailable, yet initialization succeeds and the graph stays routable
    let config = NetworkConfig::demo();
    let mut service = TrafficService::from_config(&config, Box::new(UniformDensity(1))).unwrap();

    let snapshot = service.graph_data(10_000);
    assert_eq!(snapshot.edges.len(), 15);
    for edge in &snapshot.edges {
        assert_eq!(edge.weight, 0);
    }
    let route = snapshot.best_route.expect("zero-weight graph must still route");
    assert_eq!(route.first().map(String::as_str), Some("Start"));
    assert_eq!(route.last().map(String::as_str), Some("End"));
}
