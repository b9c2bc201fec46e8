// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::{persistence, Message};
use crate::routing::Router;
use crate::settings::ThemeSettingsStore;
use crate::ui::drawer;
use iced::Task;
use std::path::PathBuf;
use tokio::sync::watch;

/// Mutable view of the application state handed to [`update`].
pub struct UpdateContext<'a> {
    pub router: &'a mut Router,
    pub theme_settings: &'a ThemeSettingsStore,
    pub theme_changes: &'a mut watch::Receiver<bool>,
    pub drawer_open: &'a mut bool,
    pub notice: &'a mut Option<String>,
    pub config_dir: Option<PathBuf>,
}

/// Handles a top-level message.
pub fn update(ctx: UpdateContext<'_>, message: Message) -> Task<Message> {
    let UpdateContext {
        router,
        theme_settings,
        theme_changes,
        drawer_open,
        notice,
        config_dir,
    } = ctx;

    match message {
        Message::Drawer(drawer_message) => {
            drawer::update(drawer_message, router, theme_settings, || {
                *drawer_open = false;
            });
            persist_theme_changes(theme_changes, config_dir);
        }
        Message::ToggleDrawer => {
            *drawer_open = !*drawer_open;
        }
        Message::CloseDrawer => {
            *drawer_open = false;
        }
        Message::DismissNotice => {
            *notice = None;
        }
    }

    Task::none()
}

/// Saves the theme preference if the store changed since the last call.
fn persist_theme_changes(theme_changes: &mut watch::Receiver<bool>, config_dir: Option<PathBuf>) {
    if !theme_changes.has_changed().unwrap_or(false) {
        return;
    }
    let dark_theme_enabled = *theme_changes.borrow_and_update();
    persistence::persist_theme_or_log(dark_theme_enabled, config_dir);
}
