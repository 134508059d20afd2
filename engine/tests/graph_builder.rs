use traffic_router::graph::topology::RoadTopology;
use traffic_router::graph::Graph;

fn segments(list: &[(&str, &str, &str)]) -> Vec<(String, String, String)> {
    list.iter()
        .map(|&(id, from, to)| (id.to_string(), from.to_string(), to.to_string()))
        .collect()
}

fn nodes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn diamond() -> RoadTopology {
    RoadTopology::new(
        nodes(&["Start", "A", "B", "End"]),
        segments(&[
            ("Start_A", "Start", "A"),
            ("Start_B", "Start", "B"),
            ("A_End", "A", "End"),
            ("B_End", "B", "End"),
        ]),
        ("Start".to_string(), "End".to_string()),
    )
    .unwrap()
}

#[test]
fn builder_is_deterministic() {
    let topology = diamond();
    let weights = [3, 1, 4, 1];

    let first = topology.build_graph(&weights);
    let second = topology.build_graph(&weights);

    assert_eq!(first.first_out(), second.first_out());
    assert_eq!(first.head(), second.head());
    assert_eq!(first.weights(), second.weights());
}

#[test]
fn every_segment_becomes_two_arcs() {
    let topology = diamond();
    let graph = topology.build_graph(&[3, 1, 4, 1]);

    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.num_arcs(), 8);

    let forward = graph.get_edge_id(0, 1).unwrap();
    let backward = graph.get_edge_id(1, 0).unwrap();
    assert_eq!(graph.edge_weight(forward), 3);
    assert_eq!(graph.edge_weight(backward), 3);
    assert_eq!(graph.edge_segment(forward), graph.edge_segment(backward));
}

#[test]
fn unsampled_segments_default_to_zero_weight_edges() {
    let topology = diamond();

    // no weights sampled at all: every edge still exists, all at weight 0
    let graph = topology.build_graph(&[]);
    assert_eq!(graph.num_arcs(), 8);
    for arc in graph.weights() {
        assert_eq!(*arc, 0);
    }

    let edge = topology.build_graph(&[7]).get_edge_id(0, 1).unwrap();
    assert_eq!(topology.build_graph(&[7]).edge_weight(edge), 7);
}

#[test]
fn duplicate_segment_pair_is_fatal() {
    let result = RoadTopology::new(
        nodes(&["A", "B"]),
        segments(&[("A_B", "A", "B"), ("B_A", "B", "A")]),
        ("A".to_string(), "B".to_string()),
    );
    assert!(result.is_err());
}

#[test]
fn unknown_node_reference_is_fatal() {
    let result = RoadTopology::new(
        nodes(&["A", "B"]),
        segments(&[("A_X", "A", "X")]),
        ("A".to_string(), "B".to_string()),
    );
    assert!(result.is_err());

    let result = RoadTopology::new(
        nodes(&["A", "B"]),
        segments(&[("A_B", "A", "B")]),
        ("A".to_string(), "Nowhere".to_string()),
    );
    assert!(result.is_err());
}
