// SPDX-License-Identifier: MPL-2.0
//! Screen navigation button: icon and label on a full-width clickable row.

use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons::{self, IconName};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Text},
    Color, Element, Length,
};

/// Resolved colors of a navigation button for one selection state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub icon_opacity: f32,
    pub text_color: Color,
    pub background: Color,
}

impl Appearance {
    /// Maps the selection state to the button colors.
    ///
    /// | state      | icon opacity | text              | background         |
    /// |------------|--------------|-------------------|--------------------|
    /// | selected   | 1.0          | primary           | primary at 12%     |
    /// | unselected | 0.6          | on-surface at 60% | surface            |
    pub fn resolve(colors: &ColorScheme, is_selected: bool) -> Self {
        if is_selected {
            Self {
                icon_opacity: opacity::OPAQUE,
                text_color: colors.primary,
                background: Color {
                    a: opacity::SELECTED_TINT,
                    ..colors.primary
                },
            }
        } else {
            Self {
                icon_opacity: opacity::MEDIUM_EMPHASIS,
                text_color: Color {
                    a: opacity::MEDIUM_EMPHASIS,
                    ..colors.on_surface
                },
                background: colors.surface,
            }
        }
    }

    /// Icon tint: the text color with the icon opacity applied on top.
    pub fn icon_tint(&self) -> Color {
        Color {
            a: self.text_color.a * self.icon_opacity,
            ..self.text_color
        }
    }
}

/// Renders the button. The whole row is the hit target.
pub fn view<'a, Message: Clone + 'a>(
    icon: IconName,
    label: String,
    is_selected: bool,
    colors: ColorScheme,
    on_click: Message,
) -> Element<'a, Message> {
    let appearance = Appearance::resolve(&colors, is_selected);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .push(icons::tinted(icon, sizing::ICON_MD, appearance.icon_tint()))
        .push(
            Text::new(label)
                .size(typography::BODY)
                .color(appearance.text_color)
                .width(Length::Fill),
        );

    button(row)
        .on_press(on_click)
        .padding(spacing::XXS)
        .width(Length::Fill)
        .style(styles::button::navigation(
            appearance.background,
            appearance.text_color,
            colors,
        ))
        .into()
}
