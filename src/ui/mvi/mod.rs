//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or timer events
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Timer-driven behavior fits the same mold: recurring work is modeled
//! as due-instants stored *inside* the state, advanced by tick intents
//! carrying the current time. Reducers never read the clock themselves,
//! which keeps every transition replayable in tests.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
