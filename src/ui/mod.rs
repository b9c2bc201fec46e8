// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: views
//! receive plain data and return elements that emit messages.
//!
//! - [`drawer`] - Navigation drawer (header, screen buttons, theme switch)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Color schemes and Light/Dark/System theme modes
//! - [`icons`] - SVG icon loading and tinting

pub mod design_tokens;
pub mod drawer;
pub mod icons;
pub mod styles;
pub mod theming;
