// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

use crate::ui::theming::ThemeMode;

/// Locale used when neither the CLI, the config file, nor the OS provides a
/// supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Theme mode used when the config file does not specify one.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::System;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";
