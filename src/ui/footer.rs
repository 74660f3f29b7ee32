use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::flow::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = hints_for(app);
        let version = format!("v{} ", VERSION);

        // Pad with char count, not byte count (hints contain Unicode).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(app: &App) -> &'static str {
    match app.screen() {
        Screen::Hero => " ←/→: Photos │ 1-9: Jump │ C: Celebrate │ Enter: Open message │ Q: Quit",
        Screen::Message if app.message().is_visible() => {
            " ←/→: Photos │ 1-9: Thumbnails │ Y: Copy wish │ C: Celebrate │ Enter: Done │ Esc: Close"
        }
        Screen::Message => " Enter: Open gift │ Q: Quit",
        Screen::Gallery if app.gallery().lightbox.is_visible() => {
            " ←/→: Photos │ Space: Play/Pause │ E: Export path │ Esc: Close"
        }
        Screen::Gallery => " Arrows: Select │ Enter: View │ S: On to the surprise │ Q: Quit",
        Screen::Surprise => " Enter: Open gift │ R: Replay the card │ Q: Quit",
    }
}
