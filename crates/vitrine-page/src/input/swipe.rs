//! Touch swipe recognition

use crate::carousel::Direction;

/// Tracks one touch gesture across a touch-start / touch-end pair
///
/// The gesture is horizontal only. A travel of more than `threshold_px`
/// is a swipe; anything shorter is a tap and produces no direction.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    /// Record where a touch began, replacing any unfinished gesture
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at `x` and classify it
    ///
    /// Dragging left (start to the right of end) moves forward; dragging
    /// right moves back. A touch-end with no recorded start is ignored.
    pub fn end(&mut self, x: f64) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        let diff = start_x - x;

        if diff.abs() > self.threshold_px {
            if diff > 0.0 {
                Some(Direction::Next)
            } else {
                Some(Direction::Previous)
            }
        } else {
            None
        }
    }

    /// Whether a touch-start is waiting for its touch-end
    pub fn in_progress(&self) -> bool {
        self.start_x.is_some()
    }
}
