// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme switch row.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{toggler, Container, Row, Text},
    Color, Element, Length,
};

/// Translation key of the switch label.
pub const LABEL_KEY: &str = "drawer-dark-theme-label";

/// Renders the label and a toggler showing `dark_theme_enabled`. Flipping the
/// toggler emits `on_toggle(new_value)`.
pub fn view<'a, Message: 'a>(
    i18n: &I18n,
    colors: ColorScheme,
    dark_theme_enabled: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(LABEL_KEY))
        .size(typography::BODY)
        .color(Color {
            a: opacity::MEDIUM_EMPHASIS,
            ..colors.on_surface
        });

    let row = Row::new()
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .push(Container::new(label).padding(spacing::XS).width(Length::Fill))
        .push(
            Container::new(toggler(dark_theme_enabled).on_toggle(on_toggle))
                .padding([0.0, spacing::XS]),
        );

    Container::new(row).padding(spacing::XS).into()
}
