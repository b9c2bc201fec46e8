// SPDX-License-Identifier: MPL-2.0
//! Drawer header: branding icon and app name.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, IconName};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{Container, Row, Text},
    Element, Length,
};

/// Icon shown left of the title.
pub const HEADER_ICON: IconName = IconName::Menu;

/// Translation key of the title.
pub const TITLE_KEY: &str = "drawer-header-title";

/// Static header content.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub icon: IconName,
    pub title: String,
}

impl Content {
    pub fn new(i18n: &I18n) -> Self {
        Self {
            icon: HEADER_ICON,
            title: i18n.tr(TITLE_KEY),
        }
    }
}

/// Renders the header. It emits no messages.
pub fn view<'a, Message: 'a>(i18n: &I18n, colors: ColorScheme) -> Element<'a, Message> {
    let content = Content::new(i18n);

    let row = Row::new()
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .push(
            Container::new(icons::tinted(content.icon, sizing::ICON_MD, colors.on_surface))
                .padding(spacing::MD),
        )
        .push(
            Text::new(content.title)
                .size(typography::TITLE_MD)
                .color(colors.on_surface),
        );

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn content_has_app_name_and_one_icon() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let content = Content::new(&i18n);

        assert_eq!(content.title, "JetNotes");
        assert_eq!(content.icon, IconName::Menu);
    }

    #[test]
    fn header_renders_without_messages() {
        let i18n = I18n::default();
        // `Infallible` messages: the header has no interactive elements.
        let _element: Element<'_, std::convert::Infallible> =
            view(&i18n, ColorScheme::light());
    }
}
