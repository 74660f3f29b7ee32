use ratatui::style::Color;

pub const ROSE: Color = Color::Rgb(0xf4, 0x3f, 0x5e);
pub const INDIGO: Color = Color::Rgb(0x81, 0x8c, 0xf8);
pub const AMBER: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xcb, 0xd5, 0xe1);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Confetti palette used by the hero and message screens.
pub const CONFETTI_PALETTE: [Color; 5] = [
    Color::Rgb(0xff, 0x7a, 0xa2),
    Color::Rgb(0xff, 0xe6, 0x80),
    Color::Rgb(0x7d, 0xd3, 0xfc),
    Color::Rgb(0xa7, 0xf3, 0xd0),
    Color::Rgb(0xff, 0xd6, 0xe0),
];

/// Bolder palette for the final surprise.
pub const SURPRISE_PALETTE: [Color; 5] = [
    Color::Rgb(0xfb, 0x71, 0x85),
    Color::Rgb(0xf9, 0x73, 0x16),
    Color::Rgb(0x22, 0xc5, 0x5e),
    Color::Rgb(0x38, 0xbd, 0xf8),
    Color::Rgb(0xa8, 0x55, 0xf7),
];
