// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ ≡  Screen title                  TopBar  │
//! ├──────────┬───────────────────────────────┤
//! │ Drawer   │                               │
//! │ (open    │        Screen content         │
//! │  only)   │                               │
//! └──────────┴───────────────────────────────┘
//! ```

use super::Message;
use crate::i18n::fluent::I18n;
use crate::routing::Screen;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::drawer;
use crate::ui::icons::{self, IconName};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, mouse_area, tooltip, Column, Container, Row, Text},
    Element, Length,
};

/// Translation key of the menu button tooltip.
pub const MENU_TOOLTIP_KEY: &str = "topbar-menu-tooltip";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_screen: Screen,
    pub dark_theme_enabled: bool,
    pub drawer_open: bool,
    pub notice: Option<&'a str>,
}

/// Renders the top bar, the drawer when open, and the current screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_dark_theme(ctx.dark_theme_enabled);

    let content = view_screen(&ctx, colors);

    let body: Element<'_, Message> = if ctx.drawer_open {
        let drawer = drawer::view(drawer::ViewContext {
            i18n: ctx.i18n,
            current_screen: ctx.current_screen,
            dark_theme_enabled: ctx.dark_theme_enabled,
        })
        .map(Message::Drawer);

        // Clicking next to the drawer closes it.
        let scrim = mouse_area(content).on_press(Message::CloseDrawer);

        Row::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(drawer)
            .push(scrim)
            .into()
    } else {
        content
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_top_bar(&ctx, colors))
        .push(body)
        .into()
}

fn view_top_bar<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let menu_button = button(icons::tinted(IconName::Menu, sizing::ICON_MD, colors.on_primary))
        .on_press(Message::ToggleDrawer)
        .padding(spacing::XS)
        .style(styles::button::icon(colors));

    let menu_button = tooltip(
        menu_button,
        Container::new(Text::new(ctx.i18n.tr(MENU_TOOLTIP_KEY)).size(typography::BODY))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    );

    let title = Text::new(ctx.i18n.tr(ctx.current_screen.title_key()))
        .size(typography::TITLE_MD)
        .color(colors.on_primary);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::XS])
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(menu_button)
        .push(title);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .style(styles::container::top_bar(colors))
        .into()
}

fn view_screen<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .width(Length::Fill);

    if let Some(key) = ctx.notice {
        let notice = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .push(
                button(Text::new(ctx.i18n.tr("notice-dismiss")).size(typography::BODY))
                    .on_press(Message::DismissNotice),
            );
        column = column.push(notice);
    }

    column = column.push(
        Container::new(
            Text::new(ctx.i18n.tr(ctx.current_screen.empty_key()))
                .size(typography::BODY)
                .color(colors.on_background),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::content(colors))
        .into()
}
