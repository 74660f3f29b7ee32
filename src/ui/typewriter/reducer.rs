//! Reducer for the typewriter reveal.

use crate::ui::mvi::Reducer;

use super::intent::TypewriterIntent;
use super::state::{TypewriterPhase, TypewriterState};

/// Reducer for typewriter state transitions.
///
/// Deterministic: the same text and the same sequence of tick instants
/// always produce the same reveal sequence.
pub struct TypewriterReducer;

impl Reducer for TypewriterReducer {
    type State = TypewriterState;
    type Intent = TypewriterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TypewriterIntent::Start { text, now } => {
                state.revealed = 0;
                state.phase = if text.is_empty() {
                    TypewriterPhase::Done
                } else {
                    TypewriterPhase::Ticking {
                        next_due: now + state.period,
                    }
                };
                state.text = text;
                state
            }

            TypewriterIntent::Tick { now } => {
                let TypewriterPhase::Ticking { mut next_due } = state.phase else {
                    return state;
                };
                let total = state.char_count();
                // A late tick reveals every character that has come
                // due, so completion time tracks the schedule rather
                // than the event loop's jitter.
                while now >= next_due && state.revealed < total {
                    state.revealed += 1;
                    next_due += state.period;
                }
                state.phase = if state.revealed == total {
                    TypewriterPhase::Done
                } else {
                    TypewriterPhase::Ticking { next_due }
                };
                state
            }

            TypewriterIntent::Cancel => {
                state.phase = TypewriterPhase::Idle;
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    const TICK: Duration = Duration::from_millis(30);

    fn started(text: &str, now: Instant) -> TypewriterState {
        TypewriterReducer::reduce(
            TypewriterState::new(TICK),
            TypewriterIntent::Start {
                text: text.to_string(),
                now,
            },
        )
    }

    #[test]
    fn start_resets_progress_and_arms_first_tick() {
        let now = Instant::now();
        let state = started("hello", now);
        assert_eq!(state.revealed, 0);
        assert_eq!(
            state.phase,
            TypewriterPhase::Ticking {
                next_due: now + TICK
            }
        );
    }

    #[test]
    fn each_tick_reveals_one_character() {
        let now = Instant::now();
        let mut state = started("hey", now);
        for step in 1..=3 {
            state = TypewriterReducer::reduce(
                state,
                TypewriterIntent::Tick {
                    now: now + TICK * step,
                },
            );
            assert_eq!(state.revealed, step as usize);
        }
        assert!(state.is_done());
    }

    #[test]
    fn tick_before_due_reveals_nothing() {
        let now = Instant::now();
        let state = started("hey", now);
        let state = TypewriterReducer::reduce(
            state,
            TypewriterIntent::Tick {
                now: now + Duration::from_millis(10),
            },
        );
        assert_eq!(state.revealed, 0);
    }

    #[test]
    fn late_tick_catches_up_deterministically() {
        let now = Instant::now();
        let state = started("typewriter", now);
        // One tick at t = 5 periods reveals exactly 5 characters.
        let state = TypewriterReducer::reduce(state, TypewriterIntent::Tick { now: now + TICK * 5 });
        assert_eq!(state.revealed, 5);
        assert_eq!(state.visible(), "typew");
    }

    #[test]
    fn completes_on_schedule() {
        let now = Instant::now();
        let text: String = std::iter::repeat('x').take(50).collect();
        let mut state = started(&text, now);
        // 49 periods in: one short of done.
        state = TypewriterReducer::reduce(state, TypewriterIntent::Tick { now: now + TICK * 49 });
        assert_eq!(state.revealed, 49);
        assert!(!state.is_done());
        // 50 periods (t = 1500 ms): complete.
        state = TypewriterReducer::reduce(state, TypewriterIntent::Tick { now: now + TICK * 50 });
        assert_eq!(state.revealed, 50);
        assert!(state.is_done());
    }

    #[test]
    fn restart_resets_revealed_to_zero() {
        let now = Instant::now();
        let state = started("first", now);
        let state = TypewriterReducer::reduce(state, TypewriterIntent::Tick { now: now + TICK * 5 });
        assert!(state.is_done());
        let later = now + Duration::from_secs(1);
        let state = TypewriterReducer::reduce(
            state,
            TypewriterIntent::Start {
                text: "second".to_string(),
                now: later,
            },
        );
        assert_eq!(state.revealed, 0);
        assert!(state.is_ticking());
    }

    #[test]
    fn cancel_freezes_progress_permanently() {
        let now = Instant::now();
        let state = started("frozen text", now);
        let state = TypewriterReducer::reduce(state, TypewriterIntent::Tick { now: now + TICK * 4 });
        assert_eq!(state.revealed, 4);
        let state = TypewriterReducer::reduce(state, TypewriterIntent::Cancel);
        // Many more periods elapse; nothing changes.
        let state =
            TypewriterReducer::reduce(state, TypewriterIntent::Tick { now: now + TICK * 100 });
        assert_eq!(state.revealed, 4);
        assert!(!state.is_done());
        assert!(!state.is_ticking());
    }

    #[test]
    fn empty_text_is_immediately_done() {
        let state = started("", Instant::now());
        assert!(state.is_done());
        assert_eq!(state.visible(), "");
    }

    #[test]
    fn same_schedule_same_reveal_sequence() {
        let now = Instant::now();
        let ticks: Vec<Instant> = (1..=8).map(|i| now + TICK * i).collect();
        let run = |mut state: TypewriterState| {
            let mut seen = Vec::new();
            for &t in &ticks {
                state = TypewriterReducer::reduce(state, TypewriterIntent::Tick { now: t });
                seen.push(state.revealed);
            }
            seen
        };
        let a = run(started("determinism", now));
        let b = run(started("determinism", now));
        assert_eq!(a, b);
    }
}
