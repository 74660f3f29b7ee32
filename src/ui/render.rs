use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::flow::Screen;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Hero => screens::hero::render(frame, body, app),
        Screen::Message => screens::message::render(frame, body, app),
        Screen::Gallery => screens::gallery::render(frame, body, app),
        Screen::Surprise => screens::surprise::render(frame, body, app),
    }
    frame.render_widget(Footer::new().widget(app, footer), footer);

    // Confetti draws last, over everything: bursts belong to the
    // surface, not to whichever screen fired them.
    let now = app.now();
    let particles = app.confetti().rendered(now, area.width, area.height);
    let buffer = frame.buffer_mut();
    for particle in particles {
        let position = Position::new(area.x + particle.column, area.y + particle.row);
        if let Some(cell) = buffer.cell_mut(position) {
            cell.set_symbol(particle.glyph);
            let mut style = Style::default().fg(particle.color);
            if particle.fading {
                style = style.add_modifier(Modifier::DIM);
            }
            cell.set_style(style);
        }
    }
}
