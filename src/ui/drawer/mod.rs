// SPDX-License-Identifier: MPL-2.0
//! Navigation drawer.
//!
//! The drawer stacks, from top to bottom: the branding header, a divider, one
//! navigation button per [`Screen`], and the light/dark theme switch.
//!
//! Rendering is a pure function of [`ViewContext`]. Clicks come back as
//! [`Message`]s which [`update`] applies to the injected collaborators:
//!
//! ```text
//! NavigateTo(screen)      → navigator.navigate_to(screen), then close_drawer()
//! DarkThemeToggled(value) → theme_settings.set_dark_theme_enabled(value)
//! ```

pub mod header;
pub mod navigation_button;
pub mod theme_item;

use crate::i18n::fluent::I18n;
use crate::routing::{Navigator, Screen};
use crate::settings::ThemeSettings;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons::IconName;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{Column, Container},
    Element, Length, Padding,
};

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_screen: Screen,
    pub dark_theme_enabled: bool,
}

impl ViewContext<'_> {
    fn colors(&self) -> ColorScheme {
        ColorScheme::for_dark_theme(self.dark_theme_enabled)
    }
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NavigateTo(Screen),
    DarkThemeToggled(bool),
}

/// One navigation entry and its selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub screen: Screen,
    pub icon: IconName,
    pub label_key: &'static str,
    pub is_selected: bool,
}

impl NavigationItem {
    /// Message emitted when this entry's button is clicked.
    pub fn on_click(&self) -> Message {
        Message::NavigateTo(self.screen)
    }
}

/// Message emitted when the theme switch is flipped to `enabled`.
pub fn on_theme_toggle(enabled: bool) -> Message {
    Message::DarkThemeToggled(enabled)
}

/// Navigation entries in drawer order, with exactly the entry for
/// `current_screen` selected.
pub fn navigation_items(current_screen: Screen) -> [NavigationItem; 2] {
    Screen::ALL.map(|screen| {
        let (icon, label_key) = match screen {
            Screen::Notes => (IconName::Home, "drawer-notes-button"),
            Screen::Trash => (IconName::Delete, "drawer-trash-button"),
        };
        NavigationItem {
            screen,
            icon,
            label_key,
            is_selected: screen == current_screen,
        }
    })
}

/// Applies a drawer message.
///
/// Navigation always fires, even for the already-current screen, and always
/// happens before `close_drawer` runs. `close_drawer` is not called for theme
/// toggles.
pub fn update<N, T, F>(message: Message, navigator: &mut N, theme_settings: &T, close_drawer: F)
where
    N: Navigator + ?Sized,
    T: ThemeSettings + ?Sized,
    F: FnOnce(),
{
    match message {
        Message::NavigateTo(screen) => {
            navigator.navigate_to(screen);
            close_drawer();
        }
        Message::DarkThemeToggled(enabled) => {
            theme_settings.set_dark_theme_enabled(enabled);
        }
    }
}

/// Render the drawer panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors();

    let divider = Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DIVIDER_HEIGHT))
        .style(styles::container::divider(colors));

    let mut content = Column::new()
        .width(Length::Fill)
        .push(header::view(ctx.i18n, colors))
        .push(divider);

    for item in navigation_items(ctx.current_screen) {
        let button = navigation_button::view(
            item.icon,
            ctx.i18n.tr(item.label_key),
            item.is_selected,
            colors,
            item.on_click(),
        );
        content = content.push(
            Container::new(button)
                .width(Length::Fill)
                .padding(Padding {
                    top: spacing::XS,
                    right: spacing::XS,
                    bottom: 0.0,
                    left: spacing::XS,
                }),
        );
    }

    content = content.push(theme_item::view(
        ctx.i18n,
        colors,
        ctx.dark_theme_enabled,
        on_theme_toggle,
    ));

    Container::new(content)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .style(styles::container::drawer_panel(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Call {
        Navigate(Screen),
        Close,
        SetDark(bool),
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    struct RecordingNavigator {
        current: Screen,
        log: CallLog,
    }

    impl Navigator for RecordingNavigator {
        fn current(&self) -> Screen {
            self.current
        }

        fn navigate_to(&mut self, screen: Screen) {
            self.current = screen;
            self.log.borrow_mut().push(Call::Navigate(screen));
        }
    }

    struct RecordingThemeSettings {
        value: Cell<bool>,
        log: CallLog,
    }

    impl ThemeSettings for RecordingThemeSettings {
        fn is_dark_theme_enabled(&self) -> bool {
            self.value.get()
        }

        fn set_dark_theme_enabled(&self, enabled: bool) {
            self.value.set(enabled);
            self.log.borrow_mut().push(Call::SetDark(enabled));
        }

        fn subscribe(&self) -> tokio::sync::watch::Receiver<bool> {
            tokio::sync::watch::channel(self.value.get()).1
        }
    }

    fn fakes(screen: Screen, dark: bool) -> (RecordingNavigator, RecordingThemeSettings, CallLog) {
        let log: CallLog = Rc::default();
        (
            RecordingNavigator {
                current: screen,
                log: log.clone(),
            },
            RecordingThemeSettings {
                value: Cell::new(dark),
                log: log.clone(),
            },
            log,
        )
    }

    #[test]
    fn exactly_current_screen_is_selected() {
        for screen in Screen::ALL {
            let items = navigation_items(screen);
            let selected: Vec<_> = items.iter().filter(|item| item.is_selected).collect();

            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].screen, screen);
        }
    }

    #[test]
    fn items_follow_drawer_order() {
        let items = navigation_items(Screen::Notes);
        assert_eq!(items[0].screen, Screen::Notes);
        assert_eq!(items[0].icon, IconName::Home);
        assert_eq!(items[1].screen, Screen::Trash);
        assert_eq!(items[1].icon, IconName::Delete);
    }

    #[test]
    fn item_labels_translate_to_screen_names() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        let labels: Vec<_> = navigation_items(Screen::Notes)
            .iter()
            .map(|item| i18n.tr(item.label_key))
            .collect();
        assert_eq!(labels, ["Notes", "Trash"]);
    }

    #[test]
    fn clicking_notes_from_trash_navigates_then_closes() {
        let (mut navigator, settings, log) = fakes(Screen::Trash, false);
        let close_log = log.clone();

        update(
            Message::NavigateTo(Screen::Notes),
            &mut navigator,
            &settings,
            || close_log.borrow_mut().push(Call::Close),
        );

        assert_eq!(*log.borrow(), vec![Call::Navigate(Screen::Notes), Call::Close]);
        assert_eq!(navigator.current(), Screen::Notes);
    }

    #[test]
    fn clicking_selected_button_still_fires_both_calls() {
        let (mut navigator, settings, log) = fakes(Screen::Trash, false);
        let close_log = log.clone();

        update(
            Message::NavigateTo(Screen::Trash),
            &mut navigator,
            &settings,
            || close_log.borrow_mut().push(Call::Close),
        );

        assert_eq!(*log.borrow(), vec![Call::Navigate(Screen::Trash), Call::Close]);
    }

    #[test]
    fn toggling_theme_only_sets_flag() {
        let (mut navigator, settings, log) = fakes(Screen::Notes, false);
        let closed = Cell::new(false);

        update(
            Message::DarkThemeToggled(true),
            &mut navigator,
            &settings,
            || closed.set(true),
        );
        assert!(settings.is_dark_theme_enabled());

        update(
            Message::DarkThemeToggled(false),
            &mut navigator,
            &settings,
            || closed.set(true),
        );
        assert!(!settings.is_dark_theme_enabled());

        assert_eq!(*log.borrow(), vec![Call::SetDark(true), Call::SetDark(false)]);
        assert!(!closed.get());
        assert_eq!(navigator.current(), Screen::Notes);
    }

    #[test]
    fn each_button_targets_its_own_screen() {
        for current in Screen::ALL {
            let pairs: Vec<_> = navigation_items(current)
                .iter()
                .map(|item| (item.screen, item.on_click()))
                .collect();
            assert_eq!(
                pairs,
                vec![
                    (Screen::Notes, Message::NavigateTo(Screen::Notes)),
                    (Screen::Trash, Message::NavigateTo(Screen::Trash)),
                ]
            );
        }
    }

    #[test]
    fn button_messages_drive_navigation() {
        for item in navigation_items(Screen::Notes) {
            let (mut navigator, settings, log) = fakes(Screen::Notes, false);
            let close_log = log.clone();
            update(item.on_click(), &mut navigator, &settings, || {
                close_log.borrow_mut().push(Call::Close)
            });
            assert_eq!(*log.borrow(), vec![Call::Navigate(item.screen), Call::Close]);
        }
    }

    #[test]
    fn theme_switch_messages_set_the_flag() {
        assert_eq!(on_theme_toggle(true), Message::DarkThemeToggled(true));
        assert_eq!(on_theme_toggle(false), Message::DarkThemeToggled(false));

        let (mut navigator, settings, log) = fakes(Screen::Trash, false);
        update(on_theme_toggle(true), &mut navigator, &settings, || {
            panic!("theme switch must not close the drawer")
        });
        assert!(settings.is_dark_theme_enabled());
        assert_eq!(*log.borrow(), vec![Call::SetDark(true)]);
    }

    #[test]
    fn drawer_view_renders_for_every_state() {
        let i18n = I18n::default();
        for screen in Screen::ALL {
            for dark_theme_enabled in [false, true] {
                let _element = view(ViewContext {
                    i18n: &i18n,
                    current_screen: screen,
                    dark_theme_enabled,
                });
            }
        }
    }
}
