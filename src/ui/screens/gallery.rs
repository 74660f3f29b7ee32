//! Gallery screen: a photo grid with a lightbox.
//!
//! The lightbox carousel starts with autoplay off; the play/pause
//! toggle arms it. Manual navigation goes through the same
//! interaction path as everywhere else, so a toggled-on autoplay
//! suspends and resumes while a toggled-off one stays off.

use std::collections::HashMap;
use std::fs;
use std::time::Instant;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Photo;
use crate::ui::app::App;
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::screens::render_photo;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, ROSE};

/// Fixed column count of the thumbnail grid.
pub const GRID_COLS: usize = 4;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LightboxState {
    #[default]
    Hidden,
    Visible {
        carousel: CarouselState,
    },
}

impl LightboxState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub len: usize,
    /// Grid cursor; also the photo the lightbox opens on.
    pub selected: usize,
    pub lightbox: LightboxState,
}

impl UiState for GalleryState {}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: 0,
            lightbox: LightboxState::Hidden,
        }
    }
}

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// Grid cursor movement; ignored while the lightbox is open.
    SelectNext,
    SelectPrev,
    SelectUp,
    SelectDown,
    OpenLightbox { carousel: CarouselState },
    /// Closing syncs the grid cursor to the photo last viewed.
    CloseLightbox,
    /// Forwarded to the lightbox carousel; dropped while hidden.
    Lightbox(CarouselIntent),
    Tick { now: Instant },
}

impl Intent for GalleryIntent {}

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::SelectNext => {
                if state.len > 0 && !state.lightbox.is_visible() {
                    state.selected = (state.selected + 1) % state.len;
                }
                state
            }
            GalleryIntent::SelectPrev => {
                if state.len > 0 && !state.lightbox.is_visible() {
                    state.selected = (state.selected + state.len - 1) % state.len;
                }
                state
            }
            GalleryIntent::SelectUp => {
                if !state.lightbox.is_visible() && state.selected >= GRID_COLS {
                    state.selected -= GRID_COLS;
                }
                state
            }
            GalleryIntent::SelectDown => {
                if !state.lightbox.is_visible() && state.selected + GRID_COLS < state.len {
                    state.selected += GRID_COLS;
                }
                state
            }
            GalleryIntent::OpenLightbox { carousel } => {
                state.lightbox = LightboxState::Visible { carousel };
                state
            }
            GalleryIntent::CloseLightbox => {
                if let LightboxState::Visible { carousel } = &state.lightbox {
                    state.selected = carousel.current.min(state.len.saturating_sub(1));
                }
                state.lightbox = LightboxState::Hidden;
                state
            }
            GalleryIntent::Lightbox(inner) => {
                if let LightboxState::Visible { carousel } = state.lightbox {
                    state.lightbox = LightboxState::Visible {
                        carousel: CarouselReducer::reduce(carousel, inner),
                    };
                }
                state
            }
            GalleryIntent::Tick { now } => {
                if let LightboxState::Visible { carousel } = state.lightbox {
                    state.lightbox = LightboxState::Visible {
                        carousel: CarouselReducer::reduce(
                            carousel,
                            CarouselIntent::Tick { now },
                        ),
                    };
                }
                state
            }
        }
    }
}

/// Best-effort photo metadata, warmed for the lightbox photo and its
/// neighbors so the info line never waits on the filesystem.
#[derive(Debug, Default)]
pub struct PhotoMetaCache {
    sizes: HashMap<String, Option<u64>>,
}

impl PhotoMetaCache {
    /// Probe the photos at `indices`, caching each result (including
    /// misses) so every path is touched at most once.
    pub fn warm(&mut self, photos: &[Photo], indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            let Some(photo) = photos.get(index) else {
                continue;
            };
            self.sizes
                .entry(photo.path.clone())
                .or_insert_with(|| fs::metadata(&photo.path).ok().map(|meta| meta.len()));
        }
    }

    pub fn size_of(&self, path: &str) -> Option<u64> {
        self.sizes.get(path).copied().flatten()
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.0} KB", (bytes as f64 / 1024.0).max(1.0))
    }
}

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    render_grid(frame, body, app);
    if let LightboxState::Visible { carousel } = &app.gallery().lightbox {
        render_lightbox(frame, body, app, carousel);
    }
}

fn render_grid(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let photos = &app.config().gallery.photos;
    let state = app.gallery();
    if body.width < 12 || body.height < 4 || photos.is_empty() {
        return;
    }

    let cols = GRID_COLS as u16;
    let rows = photos.len().div_ceil(GRID_COLS) as u16;
    let tile_width = (body.width.saturating_sub(2)) / cols;
    let tile_height = (body.height.saturating_sub(1) / rows.max(1)).clamp(3, 6);

    for (index, photo) in photos.iter().enumerate() {
        let col = (index % GRID_COLS) as u16;
        let row = (index / GRID_COLS) as u16;
        let area = Rect {
            x: body.x + 1 + col * tile_width,
            y: body.y + row * tile_height,
            width: tile_width.saturating_sub(1),
            height: tile_height,
        };
        if area.bottom() > body.bottom() || area.width < 4 {
            continue;
        }
        let selected = index == state.selected;
        let border = if selected { ROSE } else { GLOBAL_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let style = if selected {
            Style::default()
                .fg(BODY_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        frame.render_widget(
            Paragraph::new(Line::styled(photo.caption.clone(), style))
                .alignment(Alignment::Center),
            inner,
        );
    }
}

fn render_lightbox(frame: &mut Frame<'_>, body: Rect, app: &App, carousel: &CarouselState) {
    let photos = &app.config().gallery.photos;
    frame.render_widget(Clear, body);
    let playing = carousel.is_running() || carousel.is_suspended();
    let title = if playing { "Lightbox ▸" } else { "Lightbox ⏸" };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ROSE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ROSE));
    let inner = block.inner(body);
    frame.render_widget(block, body);
    if inner.height < 4 {
        return;
    }

    let photo_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    if let Some(photo) = photos.get(carousel.current) {
        let mut badge = format!("{} / {}", carousel.current + 1, carousel.len);
        if let Some(size) = app.photo_meta().size_of(&photo.path) {
            badge.push_str(&format!(" · {}", format_size(size)));
        }
        render_photo(frame, photo_area, photo, Some(badge));
    }

    let info_area = Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width,
        height: 1,
    };
    let caption = photos
        .get(carousel.current)
        .map(|photo| photo.caption.as_str())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::styled(
            caption.to_string(),
            Style::default().fg(BODY_TEXT),
        ))
        .alignment(Alignment::Center),
        info_area,
    );
}
