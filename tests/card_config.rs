use std::io::Write;

use keepsake::config::{CardConfig, ConfigError};

fn write_card(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write card");
    file
}

#[test]
fn minimal_card_fills_in_defaults() {
    let file = write_card(
        r#"
recipient = "Maya"

[hero]
headline = "Happy Birthday"
greeting = "To the best friend anyone could ask for."
photos = [{ path = "photos/one.jpg", caption = "Us" }]

[message]
prompt = "Open it!"
wishes = ["Happy birthday, Maya!"]
photos = [{ path = "photos/two.jpg" }]

[gallery]
photos = [{ path = "photos/three.jpg", caption = "That day" }]

[surprise]
heading = "read this"
letter = "Dear Maya, ..."
"#,
    );

    let config = CardConfig::load_from(file.path()).expect("load");
    assert_eq!(config.recipient, "Maya");
    assert_eq!(config.timing.hero_period_ms, 4200);
    assert_eq!(config.timing.photo_period_ms, 3000);
    assert_eq!(config.timing.wish_period_ms, 3800);
    assert_eq!(config.timing.cooldown_ms, 6000);
    assert_eq!(config.timing.type_tick_ms, 30);
    // Unset caption defaults to empty.
    assert_eq!(config.message.photos[0].caption, "");
    assert!(config.surprise.reasons.is_empty());
}

#[test]
fn timing_overrides_are_honored() {
    let file = write_card(
        r#"
[hero]
headline = "hi"
greeting = "hello"
photos = [{ path = "a.jpg" }]

[message]
prompt = "p"
wishes = ["w"]
photos = [{ path = "b.jpg" }]

[gallery]
photos = [{ path = "c.jpg" }]

[surprise]
heading = "h"
letter = "l"

[timing]
hero_period_ms = 1000
type_tick_ms = 10
"#,
    );
    let config = CardConfig::load_from(file.path()).expect("load");
    assert_eq!(config.timing.hero_period_ms, 1000);
    assert_eq!(config.timing.type_tick_ms, 10);
    // Untouched values keep their defaults.
    assert_eq!(config.timing.cooldown_ms, 6000);
}

#[test]
fn parse_errors_carry_the_path() {
    let file = write_card("this is not toml [");
    match CardConfig::load_from(file.path()) {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::path::Path::new("/definitely/not/here/card.toml");
    assert!(matches!(
        CardConfig::load_from(path),
        Err(ConfigError::ReadError { .. })
    ));
}

#[test]
fn card_without_gallery_photos_is_rejected() {
    let file = write_card(
        r#"
[hero]
headline = "hi"
greeting = "hello"
photos = [{ path = "a.jpg" }]

[message]
prompt = "p"
wishes = ["w"]
photos = [{ path = "b.jpg" }]

[gallery]
photos = []

[surprise]
heading = "h"
letter = "l"
"#,
    );
    assert!(matches!(
        CardConfig::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn zero_tick_period_is_rejected() {
    let file = write_card(
        r#"
[hero]
headline = "hi"
greeting = "hello"
photos = [{ path = "a.jpg" }]

[message]
prompt = "p"
wishes = ["w"]
photos = [{ path = "b.jpg" }]

[gallery]
photos = [{ path = "c.jpg" }]

[surprise]
heading = "h"
letter = "l"

[timing]
type_tick_ms = 0
"#,
    );
    assert!(matches!(
        CardConfig::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn built_in_sample_card_is_valid() {
    let config = CardConfig::default();
    assert!(config.validate().is_ok());
    assert!(!config.hero.photos.is_empty());
    assert!(!config.message.wishes.is_empty());
    assert!(!config.gallery.photos.is_empty());
    assert!(!config.surprise.letter.is_empty());
}
