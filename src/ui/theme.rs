//! Light palette for the page chrome and cards

use iced::Color;

pub struct Palette;

impl Palette {
    pub const BACKGROUND: Color = Color::from_rgb(0.973, 0.980, 0.988);
    pub const SURFACE: Color = Color::WHITE;
    pub const BORDER: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const PRIMARY: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const ACCENT: Color = Color::from_rgb(0.576, 0.2, 0.918);
    pub const TEXT: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const STAR: Color = Color::from_rgb(0.918, 0.702, 0.031);
    pub const ERROR: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const FOOTER: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const FOOTER_TEXT: Color = Color::from_rgb(0.82, 0.835, 0.859);
    pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.12);
}

/// Widths below this use the collapsed (mobile) navigation
pub const DESKTOP_NAV_MIN_WIDTH: f32 = 768.0;
