// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use jetnotes::ui::design_tokens::{opacity, sizing, spacing};
    use jetnotes::ui::drawer::navigation_button::Appearance;
    use jetnotes::ui::styles::{button, container};
    use jetnotes::ui::theming::{iced_theme, ColorScheme, ThemeMode};

    #[test]
    fn navigation_button_styles_use_resolved_appearance() {
        let colors = ColorScheme::light();
        let theme = Theme::Light;

        let selected = Appearance::resolve(&colors, true);
        let style = button::navigation(selected.background, selected.text_color, colors)(
            &theme,
            Status::Hovered,
        );
        assert_eq!(style.background, Some(Background::Color(selected.background)));
        assert_eq!(style.text_color, colors.primary);

        let unselected = Appearance::resolve(&colors, false);
        let style = button::navigation(unselected.background, unselected.text_color, colors)(
            &theme,
            Status::Active,
        );
        assert_eq!(style.background, Some(Background::Color(colors.surface)));
    }

    #[test]
    fn container_styles_follow_color_scheme() {
        let theme = Theme::Dark;
        let colors = ColorScheme::dark();

        let panel = container::drawer_panel(colors)(&theme);
        assert_eq!(panel.background, Some(Background::Color(colors.surface)));

        let top_bar = container::top_bar(colors)(&theme);
        assert_eq!(top_bar.background, Some(Background::Color(colors.primary)));
    }

    #[test]
    fn design_tokens_are_coherent() {
        assert!(opacity::SELECTED_TINT > opacity::HOVER_TINT);
        assert!(opacity::MEDIUM_EMPHASIS < opacity::OPAQUE);
        assert!(spacing::XS < spacing::MD);
        assert!(sizing::DRAWER_WIDTH > sizing::ICON_MD + 2.0 * spacing::MD);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(iced_theme(ThemeMode::Dark.is_dark()), Theme::Dark);
        assert_eq!(iced_theme(ThemeMode::Light.is_dark()), Theme::Light);
        assert_ne!(ColorScheme::light(), ColorScheme::dark());
        assert_eq!(ColorScheme::for_dark_theme(true), ColorScheme::dark());
    }
}
