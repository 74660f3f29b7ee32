//! Base trait for intents (user/timer actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, gestures)
/// - Timer events (autoplay ticks, reveal ticks)
/// - Navigation events
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
