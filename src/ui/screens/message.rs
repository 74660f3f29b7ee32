//! Message screen: a gift that opens into the wish modal.
//!
//! While the modal is open two carousels run side by side: the wish
//! rotation (never touched by the user) and the photo strip (manual
//! navigation suspends its autoplay for the cooldown window). Closing
//! the modal drops both, which is what stops their timers.

use std::time::Instant;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::screens::render_photo;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BODY_TEXT, MUTED_TEXT, POPUP_BORDER, ROSE};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MessageModalState {
    #[default]
    Hidden,
    Visible {
        wishes: CarouselState,
        photos: CarouselState,
    },
}

impl UiState for MessageModalState {}

impl MessageModalState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone)]
pub enum MessageIntent {
    /// Open the modal with freshly built carousels.
    Open {
        wishes: CarouselState,
        photos: CarouselState,
    },
    Close,
    /// Forwarded to the photo carousel. Dropped while hidden, so a tick
    /// or stray key can never touch a closed modal's state.
    Photos(CarouselIntent),
    Tick {
        now: Instant,
    },
}

impl Intent for MessageIntent {}

pub struct MessageReducer;

impl Reducer for MessageReducer {
    type State = MessageModalState;
    type Intent = MessageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessageIntent::Open { wishes, photos } => {
                MessageModalState::Visible { wishes, photos }
            }
            MessageIntent::Close => MessageModalState::Hidden,
            MessageIntent::Photos(inner) => match state {
                MessageModalState::Visible { wishes, photos } => MessageModalState::Visible {
                    wishes,
                    photos: CarouselReducer::reduce(photos, inner),
                },
                MessageModalState::Hidden => MessageModalState::Hidden,
            },
            MessageIntent::Tick { now } => match state {
                MessageModalState::Visible { wishes, photos } => MessageModalState::Visible {
                    wishes: CarouselReducer::reduce(wishes, CarouselIntent::Tick { now }),
                    photos: CarouselReducer::reduce(photos, CarouselIntent::Tick { now }),
                },
                MessageModalState::Hidden => MessageModalState::Hidden,
            },
        }
    }
}

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    match app.message() {
        MessageModalState::Hidden => render_gift(frame, body, app),
        MessageModalState::Visible { wishes, photos } => {
            render_modal(frame, body, app, wishes, photos)
        }
    }
}

fn render_gift(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let lines = vec![
        Line::styled(
            "A Special Surprise",
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(app.config().message.prompt.clone(), Style::default().fg(MUTED_TEXT)),
        Line::from(""),
        Line::from(""),
        Line::styled("🎁", Style::default().fg(ROSE)),
        Line::from(""),
        Line::styled("Open Gift (Enter)", Style::default().fg(ROSE)),
    ];
    let area = centered_rect_by_size(
        body,
        body.width.saturating_sub(8).min(60),
        lines.len() as u16 + 2,
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_modal(
    frame: &mut Frame<'_>,
    body: Rect,
    app: &App,
    wishes: &CarouselState,
    photos: &CarouselState,
) {
    let message = &app.config().message;
    let width = body.width.saturating_sub(4).min(74);
    let height = body.height.min(18);
    let area = centered_rect_by_size(body, width, height);
    if area.width < 10 || area.height < 8 {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!("A wish for {}", app.config().recipient),
            Style::default().fg(ROSE),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Top: the rotating wish. Middle: the photo. Bottom: thumbnails.
    let wish_height = 4.min(inner.height);
    let wish_area = Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: wish_height,
    };
    let wish = message
        .wishes
        .get(wishes.current)
        .map(String::as_str)
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Birthday wish", Style::default().fg(MUTED_TEXT)),
            Line::styled(wish.to_string(), Style::default().fg(BODY_TEXT)),
        ])
        .wrap(Wrap { trim: true }),
        wish_area,
    );

    let photo_area = Rect {
        x: inner.x + 1,
        y: inner.y + wish_height,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(wish_height + 1),
    };
    if let Some(photo) = message.photos.get(photos.current) {
        let badge = format!("Photo {} of {}", photos.current + 1, photos.len);
        render_photo(frame, photo_area, photo, Some(badge));
    }

    // Thumbnail strip: numbered slots, the selected one highlighted.
    let thumbs: Vec<Span> = (0..photos.len)
        .flat_map(|i| {
            let label = format!(" {} ", i + 1);
            let slot = if i == photos.current {
                Span::styled(
                    label,
                    Style::default().fg(ROSE).bg(ACTIVE_HIGHLIGHT),
                )
            } else {
                Span::styled(label, Style::default().fg(MUTED_TEXT))
            };
            [slot, Span::raw(" ")]
        })
        .collect();
    let thumbs_area = Rect {
        x: inner.x + 1,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(thumbs)).alignment(Alignment::Center),
        thumbs_area,
    );
}
