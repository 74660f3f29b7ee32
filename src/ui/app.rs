use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, warn};

use crate::clipboard::ClipboardHandler;
use crate::config::CardConfig;
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::confetti::ConfettiField;
use crate::ui::flow::{FlowIntent, FlowReducer, Screen};
use crate::ui::gesture::{Swipe, SwipeTracker, SWIPE_THRESHOLD};
use crate::ui::layout::{hero_slideshow_rect, layout_regions};
use crate::ui::mvi::Reducer;
use crate::ui::screens::gallery::{
    GalleryIntent, GalleryReducer, GalleryState, LightboxState, PhotoMetaCache,
};
use crate::ui::screens::message::{MessageIntent, MessageModalState, MessageReducer};
use crate::ui::screens::surprise::{SurpriseIntent, SurpriseReducer, SurpriseState};
use crate::ui::theme::{CONFETTI_PALETTE, SURPRISE_PALETTE};

// Burst shapes: (particle count, lifetime ms).
const HERO_BURST: (usize, u64) = (36, 1900);
const GIFT_OPEN_BURST: (usize, u64) = (20, 1400);
const MODAL_CELEBRATE_BURST: (usize, u64) = (14, 1400);
const DONE_BURST: (usize, u64) = (18, 1400);
const SURPRISE_BURST: (usize, u64) = (26, 1500);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Clock of the latest tick; every reducer and the renderer see
    /// this one instant.
    now: Instant,
    size: (u16, u16),
    config: CardConfig,
    screen: Screen,
    hero_slideshow: CarouselState,
    message: MessageModalState,
    gallery: GalleryState,
    surprise: SurpriseState,
    confetti: ConfettiField,
    swipe: SwipeTracker,
    photo_meta: PhotoMetaCache,
    clipboard: Option<ClipboardHandler>,
    rng: ThreadRng,
}

impl App {
    pub fn new(config: CardConfig, now: Instant) -> Self {
        let clipboard = match ClipboardHandler::new() {
            Ok(handler) => Some(handler),
            Err(err) => {
                warn!(error = %err, "clipboard unavailable, copy actions disabled");
                None
            }
        };
        let timing = config.timing.clone();
        let mut app = Self {
            should_quit: false,
            now,
            size: (80, 24),
            screen: Screen::Hero,
            hero_slideshow: CarouselState::autoplaying(
                config.hero.photos.len(),
                timing.hero_period(),
                timing.cooldown(),
                now,
            ),
            message: MessageModalState::Hidden,
            gallery: GalleryState::new(config.gallery.photos.len()),
            surprise: SurpriseState::new(timing.type_tick()),
            confetti: ConfettiField::default(),
            swipe: SwipeTracker::default(),
            photo_meta: PhotoMetaCache::default(),
            clipboard,
            rng: rand::rng(),
            config,
        };
        app.enter_screen();
        app
    }

    // -- accessors for the renderer ---------------------------------------

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn hero_slideshow(&self) -> &CarouselState {
        &self.hero_slideshow
    }

    pub fn message(&self) -> &MessageModalState {
        &self.message
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn surprise(&self) -> &SurpriseState {
        &self.surprise
    }

    pub fn confetti(&self) -> &ConfettiField {
        &self.confetti
    }

    pub fn photo_meta(&self) -> &PhotoMetaCache {
        &self.photo_meta
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // -- event-loop entry points ------------------------------------------

    pub fn on_tick(&mut self, now: Instant) {
        self.now = now;
        dispatch_mvi!(
            self,
            hero_slideshow,
            CarouselReducer,
            CarouselIntent::Tick { now }
        );
        dispatch_mvi!(self, message, MessageReducer, MessageIntent::Tick { now });
        dispatch_mvi!(self, gallery, GalleryReducer, GalleryIntent::Tick { now });
        dispatch_mvi!(self, surprise, SurpriseReducer, SurpriseIntent::Tick { now });
        // Expired bursts disappear on the tick after their lifetime,
        // no matter which screen fired them.
        self.confetti.prune(now);
        if self.gallery.lightbox.is_visible() {
            self.warm_photo_meta();
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    // -- screen flow -------------------------------------------------------

    pub fn advance_screen(&mut self) {
        dispatch_mvi!(self, screen, FlowReducer, FlowIntent::Advance);
        self.enter_screen();
    }

    pub fn restart(&mut self) {
        // Explicitly stop the reveal before tearing the screen down.
        dispatch_mvi!(self, surprise, SurpriseReducer, SurpriseIntent::CancelTyping);
        dispatch_mvi!(self, screen, FlowReducer, FlowIntent::Restart);
        self.enter_screen();
    }

    /// Jump directly to `screen` (`--start` flag).
    pub fn start_at(&mut self, screen: Screen) {
        self.screen = screen;
        self.enter_screen();
    }

    /// Reset the entered screen's owned state. Timer state lives
    /// inside those values, so replacing them is what guarantees no
    /// timer outlives its view.
    fn enter_screen(&mut self) {
        let now = self.now;
        let timing = &self.config.timing;
        match self.screen {
            Screen::Hero => {
                self.hero_slideshow = CarouselState::autoplaying(
                    self.config.hero.photos.len(),
                    timing.hero_period(),
                    timing.cooldown(),
                    now,
                );
            }
            Screen::Message => {
                self.message = MessageModalState::Hidden;
            }
            Screen::Gallery => {
                self.gallery = GalleryState::new(self.config.gallery.photos.len());
            }
            Screen::Surprise => {
                self.surprise = SurpriseState::new(timing.type_tick());
            }
        }
        self.swipe.cancel();
        info!(screen = ?self.screen, "entered screen");
    }

    // -- hero --------------------------------------------------------------

    pub fn hero_next(&mut self) {
        let now = self.now;
        dispatch_mvi!(
            self,
            hero_slideshow,
            CarouselReducer,
            CarouselIntent::UserInteraction { now }
        );
        dispatch_mvi!(self, hero_slideshow, CarouselReducer, CarouselIntent::Advance);
    }

    pub fn hero_prev(&mut self) {
        let now = self.now;
        dispatch_mvi!(
            self,
            hero_slideshow,
            CarouselReducer,
            CarouselIntent::UserInteraction { now }
        );
        dispatch_mvi!(self, hero_slideshow, CarouselReducer, CarouselIntent::Retreat);
    }

    pub fn hero_jump(&mut self, index: usize) {
        let now = self.now;
        dispatch_mvi!(
            self,
            hero_slideshow,
            CarouselReducer,
            CarouselIntent::UserInteraction { now }
        );
        dispatch_mvi!(
            self,
            hero_slideshow,
            CarouselReducer,
            CarouselIntent::JumpTo { index }
        );
    }

    pub fn celebrate(&mut self) {
        let (count, lifetime) = HERO_BURST;
        self.burst(count, lifetime, &CONFETTI_PALETTE);
    }

    // -- message -----------------------------------------------------------

    pub fn open_gift(&mut self) {
        let now = self.now;
        let timing = &self.config.timing;
        let wishes = CarouselState::autoplaying(
            self.config.message.wishes.len(),
            timing.wish_period(),
            timing.cooldown(),
            now,
        );
        let photos = CarouselState::autoplaying(
            self.config.message.photos.len(),
            timing.photo_period(),
            timing.cooldown(),
            now,
        );
        dispatch_mvi!(
            self,
            message,
            MessageReducer,
            MessageIntent::Open { wishes, photos }
        );
        let (count, lifetime) = GIFT_OPEN_BURST;
        self.burst(count, lifetime, &CONFETTI_PALETTE);
        info!("gift opened");
    }

    pub fn close_modal(&mut self) {
        dispatch_mvi!(self, message, MessageReducer, MessageIntent::Close);
    }

    pub fn modal_photo_next(&mut self) {
        self.modal_photo_intent(CarouselIntent::Advance);
    }

    pub fn modal_photo_prev(&mut self) {
        self.modal_photo_intent(CarouselIntent::Retreat);
    }

    pub fn modal_photo_jump(&mut self, index: usize) {
        self.modal_photo_intent(CarouselIntent::JumpTo { index });
    }

    fn modal_photo_intent(&mut self, intent: CarouselIntent) {
        let now = self.now;
        dispatch_mvi!(
            self,
            message,
            MessageReducer,
            MessageIntent::Photos(CarouselIntent::UserInteraction { now })
        );
        dispatch_mvi!(self, message, MessageReducer, MessageIntent::Photos(intent));
    }

    pub fn modal_celebrate(&mut self) {
        let (count, lifetime) = MODAL_CELEBRATE_BURST;
        self.burst(count, lifetime, &CONFETTI_PALETTE);
    }

    /// Copy the currently visible wish to the clipboard. Best-effort:
    /// without a clipboard this quietly does nothing.
    pub fn copy_wish(&mut self) {
        let MessageModalState::Visible { wishes, .. } = &self.message else {
            return;
        };
        let Some(wish) = self.config.message.wishes.get(wishes.current).cloned() else {
            return;
        };
        self.copy_text("wish", &wish);
    }

    /// The modal's Done action: confetti, close, move on.
    pub fn message_done(&mut self) {
        let (count, lifetime) = DONE_BURST;
        self.burst(count, lifetime, &CONFETTI_PALETTE);
        dispatch_mvi!(self, message, MessageReducer, MessageIntent::Close);
        self.advance_screen();
    }

    // -- gallery -----------------------------------------------------------

    pub fn gallery_select_next(&mut self) {
        dispatch_mvi!(self, gallery, GalleryReducer, GalleryIntent::SelectNext);
    }

    pub fn gallery_select_prev(&mut self) {
        dispatch_mvi!(self, gallery, GalleryReducer, GalleryIntent::SelectPrev);
    }

    pub fn gallery_select_up(&mut self) {
        dispatch_mvi!(self, gallery, GalleryReducer, GalleryIntent::SelectUp);
    }

    pub fn gallery_select_down(&mut self) {
        dispatch_mvi!(self, gallery, GalleryReducer, GalleryIntent::SelectDown);
    }

    pub fn open_lightbox(&mut self) {
        let timing = &self.config.timing;
        let mut carousel = CarouselState::new(
            self.config.gallery.photos.len(),
            timing.photo_period(),
            timing.cooldown(),
        );
        carousel.current = self.gallery.selected.min(carousel.len.saturating_sub(1));
        dispatch_mvi!(
            self,
            gallery,
            GalleryReducer,
            GalleryIntent::OpenLightbox { carousel }
        );
        self.warm_photo_meta();
    }

    pub fn close_lightbox(&mut self) {
        dispatch_mvi!(self, gallery, GalleryReducer, GalleryIntent::CloseLightbox);
        self.swipe.cancel();
    }

    pub fn lightbox_next(&mut self) {
        self.lightbox_intent(CarouselIntent::Advance);
    }

    pub fn lightbox_prev(&mut self) {
        self.lightbox_intent(CarouselIntent::Retreat);
    }

    fn lightbox_intent(&mut self, intent: CarouselIntent) {
        let now = self.now;
        dispatch_mvi!(
            self,
            gallery,
            GalleryReducer,
            GalleryIntent::Lightbox(CarouselIntent::UserInteraction { now })
        );
        dispatch_mvi!(self, gallery, GalleryReducer, GalleryIntent::Lightbox(intent));
        self.warm_photo_meta();
    }

    pub fn toggle_lightbox_autoplay(&mut self) {
        let LightboxState::Visible { carousel } = &self.gallery.lightbox else {
            return;
        };
        let enabled = !(carousel.is_running() || carousel.is_suspended());
        let now = self.now;
        dispatch_mvi!(
            self,
            gallery,
            GalleryReducer,
            GalleryIntent::Lightbox(CarouselIntent::SetAutoplay { enabled, now })
        );
        debug!(enabled, "lightbox autoplay toggled");
    }

    /// Resolve the current lightbox photo's source path to the
    /// clipboard, the card's stand-in for a download button.
    pub fn export_photo_path(&mut self) {
        let LightboxState::Visible { carousel } = &self.gallery.lightbox else {
            return;
        };
        let Some(photo) = self.config.gallery.photos.get(carousel.current) else {
            return;
        };
        let path = photo.path.clone();
        self.copy_text("photo path", &path);
    }

    /// Probe metadata for the lightbox photo and its neighbors so the
    /// info line has it by the time they are shown.
    fn warm_photo_meta(&mut self) {
        let LightboxState::Visible { carousel } = &self.gallery.lightbox else {
            return;
        };
        let mut indices = vec![carousel.current];
        if let Some((prev, next)) = carousel.neighbors() {
            indices.push(prev);
            indices.push(next);
        }
        self.photo_meta.warm(&self.config.gallery.photos, indices);
    }

    // -- surprise ----------------------------------------------------------

    pub fn reveal_surprise(&mut self) {
        if !self.surprise.revealed {
            let (count, lifetime) = SURPRISE_BURST;
            self.burst(count, lifetime, &SURPRISE_PALETTE);
            info!("final surprise revealed");
        }
        let now = self.now;
        let letter = self.config.surprise.letter.clone();
        dispatch_mvi!(
            self,
            surprise,
            SurpriseReducer,
            SurpriseIntent::Reveal { letter, now }
        );
    }

    // -- pointer gestures --------------------------------------------------

    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        if self.screen != Screen::Hero {
            return;
        }
        let inside = hero_slideshow_rect(self.body_rect()).contains(Position::new(column, row));
        if inside != self.hero_slideshow.held {
            dispatch_mvi!(
                self,
                hero_slideshow,
                CarouselReducer,
                CarouselIntent::Hold { held: inside }
            );
        }
    }

    pub fn pointer_pressed(&mut self, column: u16) {
        self.swipe.press(column);
    }

    pub fn pointer_released(&mut self, column: u16) {
        let Some(swipe) = self.swipe.release(column, SWIPE_THRESHOLD) else {
            return;
        };
        match self.screen {
            Screen::Hero => match swipe {
                Swipe::Left => self.hero_next(),
                Swipe::Right => self.hero_prev(),
            },
            Screen::Gallery if self.gallery.lightbox.is_visible() => match swipe {
                Swipe::Left => self.lightbox_next(),
                Swipe::Right => self.lightbox_prev(),
            },
            _ => {}
        }
    }

    // -- shared helpers ----------------------------------------------------

    fn body_rect(&self) -> Rect {
        let (cols, rows) = self.size;
        layout_regions(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        })
        .1
    }

    fn burst(&mut self, count: usize, lifetime_ms: u64, palette: &[ratatui::style::Color]) {
        self.confetti.burst(
            count,
            Duration::from_millis(lifetime_ms),
            palette,
            self.now,
            &mut self.rng,
        );
    }

    fn copy_text(&mut self, what: &str, text: &str) {
        let Some(clipboard) = &mut self.clipboard else {
            debug!(what, "copy skipped, no clipboard");
            return;
        };
        match clipboard.set_text(text) {
            Ok(()) => info!(what, "copied to clipboard"),
            Err(err) => warn!(what, error = %err, "clipboard copy failed"),
        }
    }
}
