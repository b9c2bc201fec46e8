// SPDX-License-Identifier: MPL-2.0
//! Application root state: hosts the navigation drawer next to the current
//! screen and owns the router and theme-settings store the drawer drives.
//!
//! Iced re-invokes [`App::view`] after every [`App::update`], so router and
//! theme changes made while handling a message are visible on the next frame.
//! The app also observes the theme store through a watch receiver and saves
//! the preference whenever it changes.

mod message;
pub mod paths;
pub mod persistence;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::routing::{Navigator, Router, Screen};
use crate::settings::{ThemeSettings, ThemeSettingsStore};
use crate::ui::theming;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tokio::sync::watch;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    router: Router,
    theme_settings: ThemeSettingsStore,
    theme_changes: watch::Receiver<bool>,
    drawer_open: bool,
    /// Translation key of a startup warning shown above the screen content.
    notice: Option<String>,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.router.current())
            .field("dark_theme", &self.theme_settings.is_dark_theme_enabled())
            .field("drawer_open", &self.drawer_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Iced requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the config, resolves the locale and initial theme, and starts on
    /// the Notes screen with the drawer closed.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let theme_mode = flags.theme_mode.unwrap_or(config.general.theme_mode);
        let theme_settings = ThemeSettingsStore::new(theme_mode.is_dark());
        let theme_changes = theme_settings.subscribe();

        tracing::info!(
            locale = %i18n.current_locale(),
            ?theme_mode,
            "application initialized"
        );

        let app = App {
            i18n,
            router: Router::new(Screen::Notes),
            theme_settings,
            theme_changes,
            drawer_open: false,
            notice: config_warning,
            config_dir: flags.config_dir,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen = self.i18n.tr(self.router.current().title_key());
        format!("{screen} - {app_name}")
    }

    pub fn theme(&self) -> Theme {
        theming::iced_theme(self.theme_settings.is_dark_theme_enabled())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(
            update::UpdateContext {
                router: &mut self.router,
                theme_settings: &self.theme_settings,
                theme_changes: &mut self.theme_changes,
                drawer_open: &mut self.drawer_open,
                notice: &mut self.notice,
                config_dir: self.config_dir.clone(),
            },
            message,
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            current_screen: self.router.current(),
            dark_theme_enabled: self.theme_settings.is_dark_theme_enabled(),
            drawer_open: self.drawer_open,
            notice: self.notice.as_deref(),
        })
    }

    pub fn current_screen(&self) -> Screen {
        self.router.current()
    }

    pub fn is_dark_theme_enabled(&self) -> bool {
        self.theme_settings.is_dark_theme_enabled()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
