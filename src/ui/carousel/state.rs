//! State for a timed carousel.

use std::time::{Duration, Instant};

use crate::ui::mvi::UiState;

/// Autoplay portion of the carousel state machine.
///
/// Modeled explicitly so the suspend/resume dance around user
/// interaction is a pure transition instead of timer juggling:
/// a running carousel carries its next due instant, a suspended one
/// carries the end of the cooldown window and whether autoplay should
/// come back once the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autoplay {
    /// No automatic advance.
    #[default]
    Stopped,
    /// Advancing every period; `next_due` is the next scheduled advance.
    Running { next_due: Instant },
    /// Cooling down after a user interaction. `resume_running` records
    /// whether autoplay was on before the interaction; only then does
    /// it come back when `until` passes.
    Suspended { until: Instant, resume_running: bool },
}

/// A carousel over `len` items.
///
/// The item contents live with the screen that owns the carousel (they
/// are fixed for its lifetime); the state machine only needs the count.
/// Invariant: `current < len` whenever `len > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub len: usize,
    pub current: usize,
    /// Interval between automatic advances.
    pub period: Duration,
    /// How long autoplay stays suspended after a user interaction.
    pub cooldown: Duration,
    /// While held (pointer resting on the view), ticks reschedule
    /// instead of advancing. Distinct from suspension: holding never
    /// turns autoplay off, it just freezes the schedule.
    pub held: bool,
    pub autoplay: Autoplay,
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(len: usize, period: Duration, cooldown: Duration) -> Self {
        Self {
            len,
            current: 0,
            period,
            cooldown,
            held: false,
            autoplay: Autoplay::Stopped,
        }
    }

    /// Same as [`CarouselState::new`] with autoplay already running.
    pub fn autoplaying(len: usize, period: Duration, cooldown: Duration, now: Instant) -> Self {
        Self {
            autoplay: Autoplay::Running {
                next_due: now + period,
            },
            ..Self::new(len, period, cooldown)
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.autoplay, Autoplay::Running { .. })
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self.autoplay, Autoplay::Suspended { .. })
    }

    /// Indices adjacent to the current item (previous, next), for
    /// eagerly warming per-item data. `None` on an empty carousel.
    pub fn neighbors(&self) -> Option<(usize, usize)> {
        if self.len == 0 {
            return None;
        }
        let prev = (self.current + self.len - 1) % self.len;
        let next = (self.current + 1) % self.len;
        Some((prev, next))
    }
}
