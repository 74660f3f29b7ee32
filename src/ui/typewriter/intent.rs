//! Intents for the typewriter reveal.

use std::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TypewriterIntent {
    /// Begin revealing `text` from the first character. Restarting
    /// while a reveal is in progress resets progress to zero.
    Start { text: String, now: Instant },
    /// Clock advanced; reveal any characters that have come due.
    Tick { now: Instant },
    /// Stop revealing immediately, freezing progress where it is.
    /// Dispatched when the hosting view goes away so no tick can touch
    /// a disposed view's state.
    Cancel,
}

impl Intent for TypewriterIntent {}
