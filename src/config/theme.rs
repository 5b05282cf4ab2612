//! Colour tokens
//!
//! A `Theme` is built once from the settings at startup and handed to every
//! view, so no view hard-codes brand colours.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::models::CardColor;

/// Brand palette
pub mod brand {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(0xFF, 0x72, 0x7E);
    pub const BLUE: Color = Color::Rgb(0xA5, 0xC3, 0xC3);
    pub const SAND: Color = Color::Rgb(0xE4, 0xD7, 0xCF);
    pub const ORANGE: Color = Color::Rgb(0xFF, 0xA0, 0x70);
    pub const LIME: Color = Color::Rgb(0xE6, 0xFF, 0x52);
    pub const CHARCOAL: Color = Color::Rgb(0x19, 0x24, 0x2A);
    pub const GREY: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
}

/// Which palette to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// Brand colours (true-colour terminals)
    #[default]
    Brand,
    /// Basic ANSI colours only
    HighContrast,
}

/// Immutable set of colour tokens used by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub highlight: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
}

impl Theme {
    /// Build the palette for a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Brand => Self {
                accent: brand::BLUE,
                highlight: brand::LIME,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                border_focused: brand::BLUE,
                selection_bg: brand::CHARCOAL,
                success: Color::Green,
                warning: brand::ORANGE,
                danger: brand::RED,
                info: Color::LightBlue,
            },
            ThemeName::HighContrast => Self {
                accent: Color::Cyan,
                highlight: Color::Yellow,
                text: Color::White,
                muted: Color::Gray,
                border: Color::Gray,
                border_focused: Color::Cyan,
                selection_bg: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                danger: Color::Red,
                info: Color::Blue,
            },
        }
    }

    /// Style for a block title
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style depending on focus
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Highlight style for the selected row of a list or table
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Colour for positive/negative amounts
    pub fn amount(&self, negative: bool) -> Color {
        if negative {
            self.danger
        } else {
            self.success
        }
    }

    /// Swatch colour for a card colour
    pub fn card_swatch(&self, color: CardColor) -> Color {
        match color {
            CardColor::Grey => brand::GREY,
            CardColor::Lime => brand::LIME,
            CardColor::Fawn => brand::SAND,
            CardColor::Blue => brand::BLUE,
            CardColor::Orange => brand::ORANGE,
            CardColor::Red => brand::RED,
            CardColor::Charcoal => brand::CHARCOAL,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(ThemeName::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_round_trip() {
        let json = serde_json::to_string(&ThemeName::HighContrast).unwrap();
        assert_eq!(json, "\"high-contrast\"");
        let back: ThemeName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThemeName::HighContrast);
    }

    #[test]
    fn test_high_contrast_uses_ansi_colours() {
        let theme = Theme::from_name(ThemeName::HighContrast);
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.amount(true), Color::Red);
        assert_eq!(theme.amount(false), Color::Green);
    }

    #[test]
    fn test_card_swatch() {
        let theme = Theme::default();
        assert_eq!(theme.card_swatch(CardColor::Lime), brand::LIME);
    }
}
