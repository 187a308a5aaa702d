use ratatui::style::Color;

// Slate background tones with a blue accent.
pub const ACCENT_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const HEADER_TEXT: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const TOAST_BORDER: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const STATUS_OK: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const STATUS_ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const SELECTED_BG: Color = Color::Rgb(0x1e, 0x3a, 0x8a);
