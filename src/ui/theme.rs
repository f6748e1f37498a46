use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BREADCRUMB_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const VERDICT_PRIME: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const VERDICT_NOT_PRIME: Color = Color::Rgb(0xef, 0x44, 0x44);
