//! Surprise screen: the letter, revealed one character at a time once
//! the gift is opened. The reveal gate is idempotent: pressing open
//! again mid-reveal changes nothing.

use std::time::Instant;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{AMBER, BODY_TEXT, INDIGO, MUTED_TEXT, ROSE};
use crate::ui::typewriter::{TypewriterIntent, TypewriterReducer, TypewriterState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurpriseState {
    pub revealed: bool,
    pub typewriter: TypewriterState,
}

impl UiState for SurpriseState {}

impl SurpriseState {
    pub fn new(tick: std::time::Duration) -> Self {
        Self {
            revealed: false,
            typewriter: TypewriterState::new(tick),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SurpriseIntent {
    /// Open the gift and start revealing `letter`. A no-op once
    /// revealed.
    Reveal { letter: String, now: Instant },
    /// Stop the reveal where it is; dispatched before the screen is
    /// torn down on restart.
    CancelTyping,
    Tick { now: Instant },
}

impl Intent for SurpriseIntent {}

pub struct SurpriseReducer;

impl Reducer for SurpriseReducer {
    type State = SurpriseState;
    type Intent = SurpriseIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SurpriseIntent::Reveal { letter, now } => {
                if state.revealed {
                    return state;
                }
                state.revealed = true;
                state.typewriter = TypewriterReducer::reduce(
                    state.typewriter,
                    TypewriterIntent::Start { text: letter, now },
                );
                state
            }
            SurpriseIntent::CancelTyping => {
                state.typewriter =
                    TypewriterReducer::reduce(state.typewriter, TypewriterIntent::Cancel);
                state
            }
            SurpriseIntent::Tick { now } => {
                state.typewriter =
                    TypewriterReducer::reduce(state.typewriter, TypewriterIntent::Tick { now });
                state
            }
        }
    }
}

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let surprise = &app.config().surprise;
    let state = app.surprise();
    let width = body.width.saturating_sub(6).min(70);
    let area = centered_rect_by_size(body, width, body.height);
    if area.width < 10 {
        return;
    }

    let mut lines = vec![
        Line::styled(
            "F I N A L   S U R P R I S E",
            Style::default().fg(ROSE),
        ),
        Line::styled(
            format!("{}, {} ✨", app.config().recipient, surprise.heading),
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    if !state.revealed {
        lines.push(Line::styled("🎁", Style::default().fg(ROSE)));
        lines.push(Line::styled(
            "Tap to open (Enter)",
            Style::default().fg(ROSE),
        ));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "There is a little letter hidden inside this gift.",
            Style::default().fg(MUTED_TEXT),
        ));
    } else {
        lines.push(Line::styled("💖 Surprise opened", Style::default().fg(ROSE)));
        lines.push(Line::styled(
            "Take a breath and read this slowly.",
            Style::default().fg(MUTED_TEXT),
        ));
        lines.push(Line::from(""));

        // The letter so far, with a block cursor while still typing.
        let mut letter_spans = vec![Span::styled(
            state.typewriter.visible().to_string(),
            Style::default().fg(BODY_TEXT),
        )];
        if !state.typewriter.is_done() {
            letter_spans.push(Span::styled("▌", Style::default().fg(BODY_TEXT)));
        }
        lines.push(Line::from(letter_spans));

        if !surprise.reasons.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "A few tiny reasons you're so special:",
                Style::default().fg(MUTED_TEXT),
            ));
            let mut chips = Vec::new();
            for (i, reason) in surprise.reasons.iter().enumerate() {
                let color = if i % 2 == 0 { INDIGO } else { AMBER };
                chips.push(Span::styled(
                    format!(" {reason} "),
                    Style::default().fg(color),
                ));
                chips.push(Span::raw(" "));
            }
            lines.push(Line::from(chips));
        }

        if !surprise.footer.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                surprise.footer.clone(),
                Style::default().fg(MUTED_TEXT),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
