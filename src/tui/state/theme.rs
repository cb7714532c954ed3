use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Dark theme
    #[default]
    Mocha,
    /// Light theme
    Latte,
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeVariant::Mocha => f.write_str("mocha"),
            ThemeVariant::Latte => f.write_str("latte"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Accent colors
    pub accent_primary: Color,   // Focus, selection, primary highlight
    pub accent_secondary: Color, // Links, secondary actions
    pub accent_tertiary: Color,  // Special emphasis, modal headers
    pub accent_error: Color,
    pub accent_warning: Color,
    pub accent_success: Color,
    pub accent_info: Color,
    pub accent_muted: Color, // Labels, keys, subtle highlights

    // Text hierarchy
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color, // Labels, hints

    // UI structure
    pub border_primary: Color,
    pub border_secondary: Color, // Subtle borders, disabled state
    pub bg_base: Color,
    pub bg_surface: Color,  // Selection background
    pub bg_elevated: Color, // Modals, floating elements
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self::mocha(),
            ThemeVariant::Latte => Self::latte(),
        }
    }

    fn mocha() -> Self {
        Self {
            accent_primary: Color::Rgb(0xb4, 0xbe, 0xfe),   // lavender
            accent_secondary: Color::Rgb(0x89, 0xb4, 0xfa), // blue
            accent_tertiary: Color::Rgb(0xcb, 0xa6, 0xf7),  // mauve
            accent_error: Color::Rgb(0xf3, 0x8b, 0xa8),
            accent_warning: Color::Rgb(0xf9, 0xe2, 0xaf),
            accent_success: Color::Rgb(0xa6, 0xe3, 0xa1),
            accent_info: Color::Rgb(0x94, 0xe2, 0xd5),
            accent_muted: Color::Rgb(0xfa, 0xb3, 0x87), // peach

            text_primary: Color::Rgb(0xcd, 0xd6, 0xf4),
            text_secondary: Color::Rgb(0xba, 0xc2, 0xde),
            text_tertiary: Color::Rgb(0xa6, 0xad, 0xc8),

            border_primary: Color::Rgb(0x7f, 0x84, 0x9c),
            border_secondary: Color::Rgb(0x6c, 0x70, 0x86),
            bg_base: Color::Rgb(0x1e, 0x1e, 0x2e),
            bg_surface: Color::Rgb(0x31, 0x32, 0x44),
            bg_elevated: Color::Rgb(0x45, 0x47, 0x5a),
        }
    }

    fn latte() -> Self {
        Self {
            accent_primary: Color::Rgb(0x72, 0x87, 0xfd),
            accent_secondary: Color::Rgb(0x1e, 0x66, 0xf5),
            accent_tertiary: Color::Rgb(0x88, 0x39, 0xef),
            accent_error: Color::Rgb(0xd2, 0x0f, 0x39),
            accent_warning: Color::Rgb(0xdf, 0x8e, 0x1d),
            accent_success: Color::Rgb(0x40, 0xa0, 0x2b),
            accent_info: Color::Rgb(0x17, 0x92, 0x99),
            accent_muted: Color::Rgb(0xfe, 0x64, 0x0b),

            text_primary: Color::Rgb(0x4c, 0x4f, 0x69),
            text_secondary: Color::Rgb(0x5c, 0x5f, 0x77),
            text_tertiary: Color::Rgb(0x6c, 0x6f, 0x85),

            border_primary: Color::Rgb(0x8c, 0x8f, 0xa1),
            border_secondary: Color::Rgb(0x9c, 0xa0, 0xb0),
            bg_base: Color::Rgb(0xef, 0xf1, 0xf5),
            bg_surface: Color::Rgb(0xcc, 0xd0, 0xda),
            bg_elevated: Color::Rgb(0xbc, 0xc0, 0xcc),
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_tertiary)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.accent_success)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.accent_warning)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.accent_error)
    }

    pub fn info_style(&self) -> Style {
        Style::default().fg(self.accent_info)
    }

    /// Highlighted row in a list
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .bg(self.bg_surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Color for a 0-100 score: green from 90, yellow from 80
    pub fn score_style(&self, score: u8) -> Style {
        match score {
            90.. => self.success_style(),
            80..=89 => self.warning_style(),
            _ => Style::default().fg(self.accent_muted),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ() {
        assert_ne!(Theme::new(ThemeVariant::Mocha), Theme::new(ThemeVariant::Latte));
        assert_eq!(Theme::default(), Theme::new(ThemeVariant::Mocha));
    }

    #[test]
    fn test_score_thresholds() {
        let theme = Theme::default();
        assert_eq!(theme.score_style(92), theme.success_style());
        assert_eq!(theme.score_style(90), theme.success_style());
        assert_eq!(theme.score_style(87), theme.warning_style());
        assert_eq!(theme.score_style(78).fg, Some(theme.accent_muted));
    }
}
