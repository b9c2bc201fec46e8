// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - the `--config-dir` CLI argument, or a temporary
//!    directory in tests
//! 2. **Environment variable** (`JETNOTES_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "JetNotes";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "JETNOTES_CONFIG_DIR";

/// Returns the application config directory path.
///
/// `override_path` takes highest priority.
///
/// Platform defaults:
/// - Linux: `~/.config/JetNotes/`
/// - macOS: `~/Library/Application Support/JetNotes/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\JetNotes\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/jetnotes-env");
        let custom = PathBuf::from("/tmp/jetnotes-explicit");
        let dir = get_app_config_dir_with_override(Some(custom.clone()));
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(dir, Some(custom));
    }

    #[test]
    fn env_var_is_used_when_set() {
        let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/jetnotes-env");
        let dir = get_app_config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(dir, Some(PathBuf::from("/tmp/jetnotes-env")));
    }

    #[test]
    fn empty_env_var_falls_back_to_platform_dir() {
        let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_CONFIG_DIR, "");
        let dir = get_app_config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = dir {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
