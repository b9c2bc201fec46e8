// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::drawer;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Drawer(drawer::Message),
    ToggleDrawer,
    CloseDrawer,
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `JETNOTES_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Optional theme mode override; the saved preference is used otherwise.
    pub theme_mode: Option<ThemeMode>,
}

impl Flags {
    /// Reads `--lang`, `--config-dir` and `--theme` from the arguments.
    ///
    /// Returns the flags and any arguments left unparsed.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<(Self, Vec<String>), String> {
        let lang: Option<String> = args
            .opt_value_from_str("--lang")
            .map_err(|e| e.to_string())?;
        let config_dir: Option<PathBuf> = args
            .opt_value_from_str("--config-dir")
            .map_err(|e| e.to_string())?;
        let theme: Option<String> = args
            .opt_value_from_str("--theme")
            .map_err(|e| e.to_string())?;

        let theme_mode = match theme {
            Some(raw) => Some(
                ThemeMode::parse(&raw)
                    .ok_or_else(|| format!("invalid value for --theme: {raw}"))?,
            ),
            None => None,
        };

        let remaining = args
            .finish()
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        Ok((
            Self {
                lang,
                config_dir,
                theme_mode,
            },
            remaining,
        ))
    }
}
