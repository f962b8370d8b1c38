// SPDX-License-Identifier: MPL-2.0
//! Modal overlay state and touch-swipe detection.

use crate::navigation::Direction;

/// Minimum horizontal travel, in layout units, for a touch gesture to
/// count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Playback state of the media shown in the overlay. Only meaningful for
/// video entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VideoState {
    pub playing: bool,
    pub position_secs: f64,
}

/// State of the open overlay. Absent entirely while the modal is closed,
/// so a closed overlay has no cursor to go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    /// Index into the visible set of the item currently shown.
    pub cursor: usize,
    pub video: VideoState,
}

/// Accumulates horizontal touch positions and classifies the gesture on
/// release. Swiping left advances, swiping right goes back.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn touch_end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        if diff > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_left_past_threshold_is_next() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(200.0), Some(Direction::Next));
    }

    #[test]
    fn swipe_right_past_threshold_is_prev() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(100.0);
        assert_eq!(tracker.touch_end(220.0), Some(Direction::Prev));
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(100.0);
        assert_eq!(tracker.touch_end(130.0), None);
    }

    #[test]
    fn exact_threshold_is_not_a_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(150.0);
        assert_eq!(tracker.touch_end(100.0), None);
    }

    #[test]
    fn release_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.touch_end(0.0), None);
    }
}
