use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use traffic_router::io::{load_network_config, FrameSourceConfig};

#[test]
fn parses_a_mixed_source_network() {
    let json = r#"{
        "refresh_interval_secs": 5,
        "nodes": ["Start", "R1", "End"],
        "segments": [
            { "id": "Start_R1", "from": "Start", "to": "R1",
              "source": { "type": "image", "path": "images/start_r1.png" } },
            { "id": "R1_End", "from": "R1", "to": "End",
              "source": { "type": "frames", "dir": "videos/r1_end", "step": 25 } }
        ],
        "route": { "source": "Start", "target": "End" }
    }"#;

    let dir = tempdir().unwrap();
    let path = dir.path().join("network.json");
    fs::write(&path, json).unwrap();

    let config = load_network_config(&path).unwrap();
    assert_eq!(config.refresh_interval_secs, 5);
    assert_eq!(config.nodes, vec!["Start", "R1", "End"]);
    assert_eq!(config.route.source, "Start");
    assert_eq!(config.route.target, "End");

    match &config.segments[0].source {
        FrameSourceConfig::Image { path } => assert_eq!(path, &PathBuf::from("images/start_r1.png")),
        other => panic!("expected an image source, got {:?}", other),
    }
    match &config.segments[1].source {
        FrameSourceConfig::Frames { dir, step } => {
            assert_eq!(dir, &PathBuf::from("videos/r1_end"));
            assert_eq!(*step, 25);
        }
        other => panic!("expected a frame sequence source, got {:?}", other),
    }
}

#[test]
fn refresh_interval_defaults_when_omitted() {
    let json = r#"{
        "nodes": ["A", "B"],
        "segments": [
            { "id": "A_B", "from": "A", "to": "B",
              "source": { "type": "image", "path": "a_b.png" } }
        ],
        "route": { "source": "A", "target": "B" }
    }"#;

    let dir = tempdir().unwrap();
    let path = dir.path().join("network.json");
    fs::write(&path, json).unwrap();

    let config = load_network_config(&path).unwrap();
    assert_eq!(config.refresh_interval_secs, 2);
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(load_network_config(&PathBuf::from("no/such/network.json")).is_err());
}
