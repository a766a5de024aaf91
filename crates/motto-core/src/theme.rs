//! Palette for the headline, motto and help keys.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Foreground palette entry, named in `config.toml` in kebab-case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Theme selected by the next press of `c`; wraps after white.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Terminal color the motto is drawn in.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }
}
