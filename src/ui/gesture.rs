//! Horizontal swipe recognition for press-release pointer pairs.

/// Horizontal displacement (in cells) a drag must exceed to register
/// as a swipe; anything shorter is treated as an ordinary click.
pub const SWIPE_THRESHOLD: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged leftward: show the next item.
    Left,
    /// Dragged rightward: show the previous item.
    Right,
}

/// Tracks one press-release pair at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    origin: Option<u16>,
}

impl SwipeTracker {
    /// Pointer pressed at `column`.
    pub fn press(&mut self, column: u16) {
        self.origin = Some(column);
    }

    /// Pointer released at `column`; resolves the gesture against
    /// `threshold` and resets the tracker. Returns `None` for releases
    /// without a matching press and for sub-threshold displacements.
    pub fn release(&mut self, column: u16, threshold: i32) -> Option<Swipe> {
        let origin = self.origin.take()?;
        let delta = i32::from(column) - i32::from(origin);
        if delta.abs() <= threshold {
            return None;
        }
        Some(if delta < 0 { Swipe::Left } else { Swipe::Right })
    }

    /// Abandon the in-flight press (e.g. the view closed mid-drag).
    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_left_beyond_threshold_is_swipe_left() {
        let mut tracker = SwipeTracker::default();
        tracker.press(90);
        assert_eq!(tracker.release(40, SWIPE_THRESHOLD), Some(Swipe::Left));
    }

    #[test]
    fn drag_right_beyond_threshold_is_swipe_right() {
        let mut tracker = SwipeTracker::default();
        tracker.press(10);
        assert_eq!(tracker.release(70, SWIPE_THRESHOLD), Some(Swipe::Right));
    }

    #[test]
    fn sub_threshold_drag_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.press(50);
        assert_eq!(tracker.release(80, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn exact_threshold_is_not_a_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.press(0);
        assert_eq!(tracker.release(40, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.release(100, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn release_consumes_the_press() {
        let mut tracker = SwipeTracker::default();
        tracker.press(90);
        assert_eq!(tracker.release(0, SWIPE_THRESHOLD), Some(Swipe::Left));
        assert_eq!(tracker.release(0, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn cancel_discards_the_press() {
        let mut tracker = SwipeTracker::default();
        tracker.press(90);
        tracker.cancel();
        assert_eq!(tracker.release(0, SWIPE_THRESHOLD), None);
    }
}
