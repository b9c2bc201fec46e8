// SPDX-License-Identifier: MPL-2.0
//! Observable theme settings.
//!
//! The dark-theme flag is held in a [`tokio::sync::watch`] channel: the store
//! keeps the sender, and every observer gets its own receiver from
//! [`ThemeSettings::subscribe`]. Writes that do not change the value do not
//! wake observers.

use tokio::sync::watch;

/// Read/write access to the process-wide dark-theme flag.
pub trait ThemeSettings {
    fn is_dark_theme_enabled(&self) -> bool;

    fn set_dark_theme_enabled(&self, enabled: bool);

    /// Returns a receiver notified on every change of the flag.
    fn subscribe(&self) -> watch::Receiver<bool>;
}

/// Default store backed by a watch channel.
#[derive(Debug)]
pub struct ThemeSettingsStore {
    sender: watch::Sender<bool>,
}

impl ThemeSettingsStore {
    pub fn new(dark_theme_enabled: bool) -> Self {
        let (sender, _) = watch::channel(dark_theme_enabled);
        Self { sender }
    }
}

impl Default for ThemeSettingsStore {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ThemeSettings for ThemeSettingsStore {
    fn is_dark_theme_enabled(&self) -> bool {
        *self.sender.borrow()
    }

    fn set_dark_theme_enabled(&self, enabled: bool) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == enabled {
                false
            } else {
                *current = enabled;
                true
            }
        });
        tracing::debug!(enabled, changed, "dark theme flag written");
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }
}
