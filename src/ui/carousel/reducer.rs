//! Reducer for the timed carousel.

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{Autoplay, CarouselState};

/// Reducer for carousel state transitions.
///
/// Pure function over `(CarouselState, CarouselIntent)`; the current
/// time arrives inside the intents, so suspend/resume behavior is
/// testable without real timers.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Advance => {
                // Guard: index math on an empty carousel is a no-op,
                // never a modulo by zero.
                if state.len > 0 {
                    state.current = (state.current + 1) % state.len;
                }
                state
            }

            CarouselIntent::Retreat => {
                if state.len > 0 {
                    state.current = (state.current + state.len - 1) % state.len;
                }
                state
            }

            CarouselIntent::JumpTo { index } => {
                if index < state.len {
                    state.current = index;
                }
                state
            }

            CarouselIntent::SetAutoplay { enabled, now } => {
                state.autoplay = if enabled {
                    // Re-arming while already running replaces the
                    // schedule; there is never more than one.
                    Autoplay::Running {
                        next_due: now + state.period,
                    }
                } else {
                    Autoplay::Stopped
                };
                state
            }

            CarouselIntent::UserInteraction { now } => {
                state.autoplay = match state.autoplay {
                    Autoplay::Running { .. } => Autoplay::Suspended {
                        until: now + state.cooldown,
                        resume_running: true,
                    },
                    // Each interaction restarts the full cooldown
                    // window; windows never accumulate.
                    Autoplay::Suspended { resume_running, .. } => Autoplay::Suspended {
                        until: now + state.cooldown,
                        resume_running,
                    },
                    Autoplay::Stopped => Autoplay::Stopped,
                };
                state
            }

            CarouselIntent::Hold { held } => {
                state.held = held;
                state
            }

            CarouselIntent::Tick { now } => match state.autoplay {
                Autoplay::Running { next_due } if now >= next_due => {
                    if state.held {
                        // Holding freezes the schedule without
                        // advancing or stopping.
                        state.autoplay = Autoplay::Running {
                            next_due: now + state.period,
                        };
                        return state;
                    }
                    if state.len > 0 {
                        state.current = (state.current + 1) % state.len;
                    }
                    // Re-arm from now: a stalled event loop advances
                    // at most one step per tick, it never bursts.
                    state.autoplay = Autoplay::Running {
                        next_due: now + state.period,
                    };
                    state
                }
                Autoplay::Suspended {
                    until,
                    resume_running,
                } if now >= until => {
                    state.autoplay = if resume_running {
                        Autoplay::Running {
                            next_due: now + state.period,
                        }
                    } else {
                        Autoplay::Stopped
                    };
                    state
                }
                _ => state,
            },
        }
    }
}
