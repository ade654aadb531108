use ratatui::style::Color;

pub const MINEDIA_300: Color = Color::Rgb(0xe9, 0xb0, 0x88);
pub const MINEDIA_400: Color = Color::Rgb(0xc9, 0x9a, 0x7a);
pub const MINEDIA_500: Color = Color::Rgb(0xe0, 0x7a, 0x3f);
pub const MINEDIA_700: Color = Color::Rgb(0x8f, 0x4a, 0x25);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PLACEHOLDER: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
pub const DISABLED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
