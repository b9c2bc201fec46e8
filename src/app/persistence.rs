// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the theme preference when the drawer switch is flipped. Failures are
//! logged and never interrupt the UI.

use crate::config;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Records the dark-theme flag as an explicit light/dark theme mode.
///
/// The rest of the config file is preserved.
pub fn persist_theme(dark_theme_enabled: bool, config_dir: Option<PathBuf>) -> Result<()> {
    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.theme_mode = ThemeMode::from_dark_flag(dark_theme_enabled);
    config::save_with_override(&cfg, config_dir)
}

/// Same as [`persist_theme`], logging instead of returning the error.
pub fn persist_theme_or_log(dark_theme_enabled: bool, config_dir: Option<PathBuf>) {
    match persist_theme(dark_theme_enabled, config_dir) {
        Ok(()) => tracing::info!(dark_theme_enabled, "theme preference saved"),
        Err(error) => tracing::warn!(%error, "failed to save theme preference"),
    }
}
