//! Timed carousel: an index over a fixed item sequence with
//! auto-advance, manual navigation and interaction cooldown.
//!
//! Every rotating element in the card (hero slideshow, wish rotation,
//! modal photo strip, lightbox) is one `CarouselState` instance with
//! its own period and cooldown.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{Autoplay, CarouselState};
