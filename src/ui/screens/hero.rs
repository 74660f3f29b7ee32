//! Hero screen: greeting on the left, auto-playing slideshow on the
//! right. The slideshow pauses while the pointer rests on it and
//! suspends after manual navigation.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::hero_slideshow_rect;
use crate::ui::screens::render_photo;
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, ROSE};

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let slideshow = hero_slideshow_rect(body);
    let text_width = slideshow
        .x
        .saturating_sub(body.x)
        .saturating_sub(2)
        .min(body.width);
    let text_area = Rect {
        x: body.x + 2,
        y: body.y + body.height.saturating_sub(body.height.min(14)) / 2,
        width: text_width,
        height: body.height.min(14),
    };

    let hero = &app.config().hero;
    let mut lines = vec![
        Line::styled(
            format!("✦ {} ✦", hero.headline),
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            app.config().recipient.clone(),
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(hero.greeting.clone(), Style::default().fg(BODY_TEXT)),
    ];
    if !hero.verse.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            hero.verse.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        text_area,
    );

    render_slideshow(frame, slideshow, app);
}

fn render_slideshow(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if area.width < 8 || area.height < 6 {
        return;
    }
    let carousel = app.hero_slideshow();
    let photos = &app.config().hero.photos;
    let title = if carousel.held { "Memories (paused)" } else { "Memories" };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ROSE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let photo_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    if let Some(photo) = photos.get(carousel.current) {
        let badge = format!("{}/{}", carousel.current + 1, carousel.len);
        render_photo(frame, photo_area, photo, Some(badge));
    }

    // Dot indicators, one per photo, the current one filled.
    let dots: Vec<Span> = (0..carousel.len)
        .flat_map(|i| {
            let dot = if i == carousel.current {
                Span::styled("●", Style::default().fg(ROSE))
            } else {
                Span::styled("○", Style::default().fg(MUTED_TEXT))
            };
            [dot, Span::raw(" ")]
        })
        .collect();
    let dots_area = Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        dots_area,
    );
}
