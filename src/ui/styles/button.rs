// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for a drawer navigation row.
///
/// `background` and `text_color` are the resting colors of the row; hover and
/// press add an on-surface tint on top of an unselected row.
pub fn navigation(
    background: Color,
    text_color: Color,
    colors: ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hover = Color {
            a: opacity::HOVER_TINT,
            ..colors.on_surface
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed if background == colors.surface => {
                hover
            }
            _ => background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..button::Style::default()
        }
    }
}

/// Style for icon-only buttons placed on the top bar.
pub fn icon(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::HOVER_TINT,
                ..colors.on_primary
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color: colors.on_primary,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keeps_resting_colors_when_active() {
        let colors = ColorScheme::light();
        let tint = Color {
            a: opacity::SELECTED_TINT,
            ..colors.primary
        };
        let style = navigation(tint, colors.primary, colors)(&Theme::Light, button::Status::Active);

        assert_eq!(style.background, Some(Background::Color(tint)));
        assert_eq!(style.text_color, colors.primary);
    }

    #[test]
    fn navigation_hover_tints_unselected_rows_only() {
        let colors = ColorScheme::dark();
        let unselected = navigation(colors.surface, colors.on_surface, colors);
        let hovered = unselected(&Theme::Dark, button::Status::Hovered);
        assert_ne!(hovered.background, Some(Background::Color(colors.surface)));

        let tint = Color {
            a: opacity::SELECTED_TINT,
            ..colors.primary
        };
        let selected = navigation(tint, colors.primary, colors);
        let hovered = selected(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hovered.background, Some(Background::Color(tint)));
    }

    #[test]
    fn icon_button_is_transparent_at_rest() {
        let style = icon(ColorScheme::light())(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }
}
