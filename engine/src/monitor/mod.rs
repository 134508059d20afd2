use std::time::{SystemTime, UNIX_EPOCH};

use crate::graph::Timestamp;

pub mod segment;
pub mod service;
pub mod snapshot;
pub mod store;

/// Wall-clock milliseconds since the unix epoch.
pub fn unix_timestamp_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as Timestamp)
        .unwrap_or(0)
}
