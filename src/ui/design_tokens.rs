// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Emphasis and tint levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use jetnotes::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let selected_tint = Color {
    a: opacity::SELECTED_TINT,
    ..palette::GREEN_700
};

let padding = spacing::XS; // 8px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.047, 0.047, 0.047);
    pub const GRAY_900: Color = Color::from_rgb(0.071, 0.071, 0.071); // #121212

    // Brand colors (green scale)
    pub const GREEN_300: Color = Color::from_rgb(0.4, 0.733, 0.557);
    pub const GREEN_700: Color = Color::from_rgb(0.0, 0.408, 0.216); // #006837
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Background tint behind the selected navigation button.
    pub const SELECTED_TINT: f32 = 0.12;

    /// Hover feedback on clickable rows.
    pub const HOVER_TINT: f32 = 0.08;

    /// Divider lines between drawer sections.
    pub const DIVIDER: f32 = 0.2;

    /// Secondary text and de-emphasized icons.
    pub const MEDIUM_EMPHASIS: f32 = 0.6;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    pub const DIVIDER_HEIGHT: f32 = 1.0;
    pub const TOP_BAR_HEIGHT: f32 = 56.0;

    pub const DRAWER_WIDTH: f32 = 280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the drawer header and top bar.
    pub const TITLE_MD: f32 = 20.0;

    /// Navigation labels and settings rows.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HOVER_TINT > 0.0 && opacity::HOVER_TINT < opacity::SELECTED_TINT);
    assert!(opacity::SELECTED_TINT < opacity::DIVIDER);
    assert!(opacity::MEDIUM_EMPHASIS > opacity::DIVIDER && opacity::MEDIUM_EMPHASIS < 1.0);

    assert!(sizing::DRAWER_WIDTH > sizing::ICON_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::SM * 2.0);
    }
}
