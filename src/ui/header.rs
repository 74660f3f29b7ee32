use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, ROSE};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(
                format!("❦ For {} ", app.config().recipient),
                Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("· ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                app.screen().title().to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
