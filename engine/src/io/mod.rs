use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sampling::frame_cursor::FrameCursor;

/// Static description of a monitored network: nodes, segments with their
/// frame sources, the designated routing pair and the refresh interval.
/// Loaded once at initialization, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    pub nodes: Vec<String>,
    pub segments: Vec<SegmentConfig>,
    pub route: RouteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub id: String,
    pub from: String,
    pub to: String,
    pub source: FrameSourceConfig,
}

/// Per-segment frame source: a single static image, or a directory holding a
/// video-like frame sequence sampled with the given step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameSourceConfig {
    Image { path: PathBuf },
    Frames { dir: PathBuf, step: usize },
}

impl FrameSourceConfig {
    /// Open the configured source. Missing or unreadable sources degrade to
    /// an `Unavailable` cursor instead of failing initialization.
    pub fn open_cursor(&self) -> FrameCursor {
        match self {
            FrameSourceConfig::Image { path } => FrameCursor::open_image(path),
            FrameSourceConfig::Frames { dir, step } => FrameCursor::open_sequence(dir, *step),
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    2
}

pub fn load_network_config(path: &Path) -> Result<NetworkConfig, Box<dyn Error>> {
    let file = File::open(path)?;
    let config = serde_json::from_reader(BufReader::new(file))?;
    Ok(config)
}

impl NetworkConfig {
    /// The ten-node demo network with its fifteen camera-monitored segments.
    /// Per-segment steps follow the hybrid time-lapse setup; intervals of
    /// 2 s and 5 s are both in active use, this default picks 2 s.
    pub fn demo() -> NetworkConfig {
        let image = |id: &str, from: &str, to: &str, path: &str| SegmentConfig {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            source: FrameSourceConfig::Image { path: PathBuf::from(path) },
        };

        NetworkConfig {
            refresh_interval_secs: 2,
            nodes: ["Start", "R1", "R2", "R3", "R4", "End", "U1", "U2", "L1", "L2"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            segments: vec![
                image("Start_R1", "Start", "R1", "images/Start_r1.png"),
                image("R1_R2", "R1", "R2", "images/r1_r2.png"),
                image("R2_R3", "R2", "R3", "images/r2_r3.png"),
                image("R3_R4", "R3", "R4", "images/r3_r4.png"),
                image("R4_End", "R4", "End", "images/r4_end.png"),
                image("U1_R1", "U1", "R1", "images/u1_r1.png"),
                image("U1_R2", "U1", "R2", "images/u1_r2.png"),
                image("U2_R3", "U2", "R3", "images/u2_r3.png"),
                image("U2_R4", "U2", "R4", "images/u2_r4.png"),
                image("L1_R1", "L1", "R1", "images/l1_r1.png"),
                image("L1_R2", "L1", "R2", "images/l1_r2.png"),
                image("L2_R3", "L2", "R3", "images/l2_r3.png"),
                image("L2_R4", "L2", "R4", "images/l2_r4.png"),
                image("L1_L2", "L1", "L2", "images/l1-l2.jpg"),
                image("U1_U2", "U1", "U2", "images/u1_u2.png"),
            ],
            route: RouteConfig { source: "Start".to_string(), target: "End".to_string() },
        }
    }
}
