// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Drawer side panel: surface color with on-surface text.
pub fn drawer_panel(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.on_surface),
        ..Default::default()
    }
}

/// Thin separator line: on-surface at divider opacity.
pub fn divider(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::DIVIDER,
            ..colors.on_surface
        })),
        ..Default::default()
    }
}

/// App bar across the top of the window.
pub fn top_bar(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.primary)),
        text_color: Some(colors.on_primary),
        ..Default::default()
    }
}

/// Screen content area.
pub fn content(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.background)),
        text_color: Some(colors.on_background),
        ..Default::default()
    }
}
