// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`.
//! Handles are cached using `OnceLock` so the SVG source is parsed once, and
//! every icon is tinted at render time through the `svg` widget style.
//!
//! # Naming Convention
//!
//! Icons are addressed by stable identifiers describing their appearance
//! (`home`, `delete`, `menu`), not the action they trigger.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon handle accessor with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal) => {
        fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(home_handle, "home.svg");
define_icon!(delete_handle, "delete.svg");
define_icon!(menu_handle, "menu.svg");

/// Icons available to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    /// House outline.
    Home,
    /// Trash can.
    Delete,
    /// Three horizontal bars.
    Menu,
}

impl IconName {
    /// Stable asset identifier.
    pub fn id(self) -> &'static str {
        match self {
            IconName::Home => "home",
            IconName::Delete => "delete",
            IconName::Menu => "menu",
        }
    }

    pub fn handle(self) -> Handle {
        match self {
            IconName::Home => home_handle(),
            IconName::Delete => delete_handle(),
            IconName::Menu => menu_handle(),
        }
    }
}

/// Builds a square icon of `size` tinted with `color`.
pub fn tinted<'a>(icon: IconName, size: f32, color: Color) -> Svg<'a, Theme> {
    Svg::new(icon.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_ids_are_stable() {
        assert_eq!(IconName::Home.id(), "home");
        assert_eq!(IconName::Delete.id(), "delete");
        assert_eq!(IconName::Menu.id(), "menu");
    }

    #[test]
    fn handles_are_cached() {
        assert_eq!(IconName::Home.handle().id(), IconName::Home.handle().id());
        assert_ne!(IconName::Home.handle().id(), IconName::Menu.handle().id());
    }

    #[test]
    fn tinted_icon_builds() {
        let _icon = tinted(IconName::Delete, 24.0, Color::BLACK);
    }
}
