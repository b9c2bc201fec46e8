// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes, and the theme mode stored in the config.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Material-style color roles used by the drawer and host screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub on_primary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub background: Color,
    pub on_background: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: palette::GREEN_700,
            on_primary: palette::WHITE,
            surface: palette::WHITE,
            on_surface: palette::BLACK,
            background: palette::WHITE,
            on_background: palette::BLACK,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: palette::GREEN_300,
            on_primary: palette::BLACK,
            surface: palette::GRAY_900,
            on_surface: palette::WHITE,
            background: palette::GRAY_950,
            on_background: palette::WHITE,
        }
    }

    /// Picks the scheme matching the dark-theme flag.
    #[must_use]
    pub fn for_dark_theme(dark_theme_enabled: bool) -> Self {
        if dark_theme_enabled {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Explicit mode recorded when the user flips the drawer switch.
    #[must_use]
    pub fn from_dark_flag(dark_theme_enabled: bool) -> Self {
        if dark_theme_enabled {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Parses a CLI value (`light`, `dark`, `system`), ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

/// Iced built-in theme for the dark-theme flag.
#[must_use]
pub fn iced_theme(dark_theme_enabled: bool) -> Theme {
    if dark_theme_enabled {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.2);
    }

    #[test]
    fn on_surface_contrasts_with_surface() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!((scheme.surface.r - scheme.on_surface.r).abs() > 0.5);
        }
    }

    #[test]
    fn both_themes_use_green_primary() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.primary.g > scheme.primary.r);
            assert!(scheme.primary.g > scheme.primary.b);
        }
    }

    #[test]
    fn for_dark_theme_selects_scheme() {
        assert_eq!(ColorScheme::for_dark_theme(true), ColorScheme::dark());
        assert_eq!(ColorScheme::for_dark_theme(false), ColorScheme::light());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the host, just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn from_dark_flag_is_explicit() {
        assert_eq!(ThemeMode::from_dark_flag(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark_flag(false), ThemeMode::Light);
    }

    #[test]
    fn parse_accepts_known_modes() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("SYSTEM"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn iced_theme_follows_flag() {
        assert_eq!(iced_theme(true), Theme::Dark);
        assert_eq!(iced_theme(false), Theme::Light);
    }
}
