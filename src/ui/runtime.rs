use std::io;
use std::time::{Duration, Instant};

use crate::config::CardConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::flow::Screen;
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// One tick per typewriter period; everything slower (autoplay,
/// cooldowns, burst lifetimes) rides on the same tick and compares
/// against its own due-instants.
const TICK_RATE: Duration = Duration::from_millis(30);

pub fn run(config: CardConfig, start: Option<Screen>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, Instant::now());
    if let Some(screen) = start {
        app.start_at(screen);
    }
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick(now)) => app.on_tick(now),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
