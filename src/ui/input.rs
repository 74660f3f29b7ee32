//! Keyboard and pointer routing.
//!
//! One dispatcher consults the active screen (and its modal state) for
//! every event, so Escape/arrow handling can never stack across
//! open/close cycles the way per-view listeners could.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::app::App;
use crate::ui::flow::Screen;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Hero => handle_hero_key(app, key),
        Screen::Message => handle_message_key(app, key),
        Screen::Gallery => handle_gallery_key(app, key),
        Screen::Surprise => handle_surprise_key(app, key),
    }
}

fn handle_hero_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.hero_prev(),
        KeyCode::Right => app.hero_next(),
        KeyCode::Enter => app.advance_screen(),
        KeyCode::Char('c') => app.celebrate(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(index) = digit_to_index(ch) {
                app.hero_jump(index);
            }
        }
        _ => {}
    }
}

fn handle_message_key(app: &mut App, key: KeyEvent) {
    if app.message().is_visible() {
        match key.code {
            KeyCode::Esc => app.close_modal(),
            KeyCode::Left => app.modal_photo_prev(),
            KeyCode::Right => app.modal_photo_next(),
            KeyCode::Enter | KeyCode::Char('d') => app.message_done(),
            KeyCode::Char('y') => app.copy_wish(),
            KeyCode::Char('c') => app.modal_celebrate(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if let Some(index) = digit_to_index(ch) {
                    app.modal_photo_jump(index);
                }
            }
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => app.open_gift(),
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    if app.gallery().lightbox.is_visible() {
        match key.code {
            KeyCode::Esc => app.close_lightbox(),
            KeyCode::Left => app.lightbox_prev(),
            KeyCode::Right => app.lightbox_next(),
            KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_lightbox_autoplay(),
            KeyCode::Char('e') => app.export_photo_path(),
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Left => app.gallery_select_prev(),
        KeyCode::Right => app.gallery_select_next(),
        KeyCode::Up => app.gallery_select_up(),
        KeyCode::Down => app.gallery_select_down(),
        KeyCode::Enter => app.open_lightbox(),
        KeyCode::Char('s') => app.advance_screen(),
        _ => {}
    }
}

fn handle_surprise_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.reveal_surprise(),
        KeyCode::Char('r') => app.restart(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => app.pointer_moved(mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Left) => app.pointer_pressed(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_released(mouse.column),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a digit key to a zero-based carousel index ('1' → 0).
fn digit_to_index(ch: char) -> Option<usize> {
    let digit = ch.to_digit(10)? as usize;
    digit.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardConfig;
    use crossterm::event::KeyEventState;
    use std::time::Instant;

    fn make_app() -> App {
        App::new(CardConfig::default(), Instant::now())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn q_quits_from_any_screen() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut app = make_app();
        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert!(!app.should_quit());
    }

    #[test]
    fn hero_arrows_navigate_the_slideshow() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.hero_slideshow().current, 1);
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.hero_slideshow().current, 0);
    }

    #[test]
    fn hero_digit_jumps_to_that_photo() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.hero_slideshow().current, 2);
    }

    #[test]
    fn digit_beyond_length_is_rejected() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.hero_slideshow().current, 0);
    }

    #[test]
    fn enter_walks_hero_to_message() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Message);
    }

    #[test]
    fn escape_closes_the_wish_modal() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Enter)); // open gift
        assert!(app.message().is_visible());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.message().is_visible());
        assert_eq!(app.screen(), Screen::Message);
    }

    #[test]
    fn escape_with_modal_closed_changes_nothing() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Message);
        assert!(!app.message().is_visible());
    }

    #[test]
    fn escape_closes_the_lightbox_but_not_the_gallery() {
        let mut app = make_app();
        app.start_at(Screen::Gallery);
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.gallery().lightbox.is_visible());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.gallery().lightbox.is_visible());
        assert_eq!(app.screen(), Screen::Gallery);
    }

    #[test]
    fn surprise_r_restarts_the_card() {
        let mut app = make_app();
        app.start_at(Screen::Surprise);
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.surprise().revealed);
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.screen(), Screen::Hero);
        assert!(!app.surprise().revealed);
    }
}
