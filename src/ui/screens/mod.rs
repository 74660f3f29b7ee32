//! The four card screens.
//!
//! Each screen owns its timer state machines (carousels, typewriter)
//! and resets them when the screen is entered, so no timer survives
//! the view that started it.

pub mod gallery;
pub mod hero;
pub mod message;
pub mod surprise;

use std::path::Path;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::Photo;
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT};

/// Draw a framed stand-in for a photo.
///
/// Asset bytes are external to the card; what the terminal shows is
/// the photo's caption and source file, centered in a frame.
pub(crate) fn render_photo(frame: &mut Frame<'_>, area: Rect, photo: &Photo, badge: Option<String>) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let file_name = Path::new(&photo.path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| photo.path.clone());

    let mut lines = Vec::new();
    let padding = inner.height.saturating_sub(3) / 2;
    for _ in 0..padding {
        lines.push(Line::from(""));
    }
    if !photo.caption.is_empty() {
        lines.push(Line::styled(
            photo.caption.clone(),
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::styled(file_name, Style::default().fg(MUTED_TEXT)));
    if let Some(badge) = badge {
        lines.push(Line::styled(badge, Style::default().fg(MUTED_TEXT)));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
