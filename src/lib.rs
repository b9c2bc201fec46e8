// SPDX-License-Identifier: MPL-2.0
//! `jetnotes` is a note-taking shell built with the Iced GUI framework.
//!
//! Its centerpiece is the navigation drawer: a side panel with a branded
//! header, one button per top-level screen, and a dark-theme switch. The
//! drawer talks to the rest of the application through two seams, the
//! [`routing::Navigator`] and [`settings::ThemeSettings`] traits.

#![doc(html_root_url = "https://docs.rs/jetnotes/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod routing;
pub mod settings;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
