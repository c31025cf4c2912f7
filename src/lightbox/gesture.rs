// SPDX-License-Identifier: MPL-2.0
//! Touch swipe classification.
//!
//! A swipe is recognized from exactly two points: where the finger went
//! down and where it lifted. The motion must be strictly more horizontal
//! than vertical and longer than [`SWIPE_MIN_DISTANCE`]; everything else is
//! ignored so that vertical scrolling never turns into navigation.

use super::Intent;
use iced::Point;

/// Minimum horizontal travel, in logical pixels, for a swipe to count.
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;

/// Classifies a finger-down/finger-up pair of points into a navigation
/// intent. Leftward motion (start right of end) advances, rightward motion
/// goes back. A diagonal that is not strictly horizontal-dominant, or a
/// travel at or below the threshold, yields no intent.
pub fn classify_swipe(start: Point, end: Point) -> Option<Intent> {
    let dx = start.x - end.x;
    let dy = start.y - end.y;

    if dx.abs() > dy.abs() && dx.abs() > SWIPE_MIN_DISTANCE {
        if dx > 0.0 {
            Some(Intent::Next)
        } else {
            Some(Intent::Previous)
        }
    } else {
        None
    }
}

/// Accumulates the start point of the touch sequence in flight.
///
/// At most one gesture is tracked at a time: a new finger-down overwrites
/// any stale start point, and the tracker is cleared on every finger-up or
/// cancel regardless of whether the motion classified as a swipe.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finger-down position, discarding any previous one.
    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Consumes the tracked start point and classifies the completed
    /// gesture. Returns `None` when no touch was in flight.
    pub fn finish(&mut self, at: Point) -> Option<Intent> {
        let start = self.start.take()?;
        classify_swipe(start, at)
    }

    /// Drops the in-flight gesture without classifying it.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
