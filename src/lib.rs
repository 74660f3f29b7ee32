//! keepsake: a birthday card that lives in your terminal.
//!
//! Four screens (hero, wish reveal, gallery, typewriter surprise)
//! driven by pure timer state machines: carousels that auto-advance
//! and suspend on interaction, a character-by-character reveal, and
//! fire-and-forget confetti bursts. Card content comes from
//! `card.toml`; see [`config::CardConfig`].

pub mod clipboard;
pub mod config;
pub mod logging;
pub mod ui;
