// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded JetNotes SVG at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized window icon, in pixels.
pub const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/jetnotes.svg");

/// Rasterize the embedded SVG icon to a square RGBA buffer.
pub fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(error) => {
            tracing::warn!(%error, "failed to parse window icon");
            return None;
        }
    };

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / orig_size.width(),
        size as f32 / orig_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.take())
}

/// Builds the window icon. Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}
