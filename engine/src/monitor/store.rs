use std::time::Duration;

use log::{debug, info};
use rayon::prelude::*;

use crate::graph::{Timestamp, Weight};
use crate::monitor::segment::RoadSegment;
use crate::sampling::density::DensityEstimator;

/// Owns every segment's cursor and latest weight, plus the refresh state.
///
/// This is the only mutable shared state of the engine. Refreshing requires
/// exclusive access, and readers always take a copied weight snapshot, so a
/// graph is never assembled from two different refresh cycles.
pub struct SegmentStore {
    segments: Vec<RoadSegment>,
    last_refresh: Timestamp,
    refresh_interval: u64,
}

impl SegmentStore {
    /// `last_refresh` starts at 0, so the first query against a wall-clock
    /// timestamp always triggers an initial refresh.
    pub fn new(segments: Vec<RoadSegment>, refresh_interval: Duration) -> SegmentStore {
        SegmentStore {
            segments,
            last_refresh: 0,
            refresh_interval: refresh_interval.as_millis() as u64,
        }
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, index: usize) -> &RoadSegment {
        &self.segments[index]
    }

    /// Pure debounce predicate: true once a full interval has elapsed since
    /// the last completed refresh pass. No jitter, no backoff.
    pub fn should_refresh(&self, now: Timestamp) -> bool {
        now.saturating_sub(self.last_refresh) >= self.refresh_interval
    }

    /// Re-sample every segment and commit the new weights.
    ///
    /// Segments are refreshed in parallel; each worker exclusively owns one
    /// segment and its cursor. A segment without new data keeps its last
    /// known weight, and no per-segment failure aborts the batch. The
    /// last-refresh timestamp is advanced once the full pass is done,
    /// regardless of individual failures.
    pub fn refresh_all(&mut self, estimator: &dyn DensityEstimator, now: Timestamp) {
        self.segments.par_iter_mut().for_each(|segment| match segment.refresh(estimator) {
            Some(count) => debug!("{}: {} vehicles", segment.id(), count),
            None => debug!("{}: no new frame, keeping weight {}", segment.id(), segment.weight()),
        });

        self.last_refresh = now;
        info!("refreshed {} segments", self.segments.len());
    }

    /// Consistent copy of all weights, ordered by segment index.
    pub fn weights(&self) -> Vec<Weight> {
        self.segments.iter().map(|segment| segment.weight()).collect()
    }

    pub fn last_refresh(&self) -> Timestamp {
        self.last_refresh
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval)
    }

    /// Seconds until the next refresh is due, truncated like the countdown
    /// the query API reports. 0 when a refresh is already overdue.
    pub fn seconds_until_next_refresh(&self, now: Timestamp) -> u64 {
        self.refresh_interval.saturating_sub(now.saturating_sub(self.last_refresh)) / 1000
    }

    /// Release every frame source. Runs on shutdown.
    pub fn close_all(&mut self) {
        for segment in &mut self.segments {
            segment.close();
        }
        info!("released {} frame sources", self.segments.len());
    }
}
