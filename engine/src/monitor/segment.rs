use std::panic::{catch_unwind, AssertUnwindSafe};

use log::warn;

use crate::graph::Weight;
use crate::sampling::density::DensityEstimator;
use crate::sampling::frame_cursor::FrameCursor;

/// A monitored road edge: identifier, its frame source and the latest density
/// weight. Weight starts at 0 and is only mutated by the refresh cycle.
pub struct RoadSegment {
    id: String,
    cursor: FrameCursor,
    weight: Weight,
}

impl RoadSegment {
    pub fn new(id: String, cursor: FrameCursor) -> RoadSegment {
        RoadSegment { id, cursor, weight: 0 }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn cursor(&self) -> &FrameCursor {
        &self.cursor
    }

    /// Sample the next frame and re-estimate this segment's weight.
    ///
    /// Returns the new weight, or `None` when there was no new data this
    /// cycle; the last-known weight is preserved in that case. A panicking
    /// estimator (a violation of its total-function contract) is contained
    /// here and treated the same as an absent frame.
    pub fn refresh(&mut self, estimator: &dyn DensityEstimator) -> Option<Weight> {
        let frame = self.cursor.advance()?;

        match catch_unwind(AssertUnwindSafe(|| estimator.estimate(&frame))) {
            Ok(count) => {
                self.weight = count;
                Some(count)
            }
            Err(_) => {
                warn!("{}: density estimation failed, keeping weight {}", self.id, self.weight);
                None
            }
        }
    }

    pub fn close(&mut self) {
        self.cursor.close();
    }
}
