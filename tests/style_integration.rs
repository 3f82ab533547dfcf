// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as iced_button, svg};
    use iced::Theme;
    use iced_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_gallery::ui::glyphs::Glyph;
    use iced_gallery::ui::styles::{button, container, overlay};
    use iced_gallery::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;
        let status = iced_button::Status::Active;

        let _ = button::primary(&theme, status);
        let _ = button::secondary(&theme, status);
        let _ = button::category_chip(true)(&theme, status);
        let _ = button::link(&theme, status);
        let _ = button::tile(&theme, status);
        let _ = button::overlay(&theme, status);
        let _ = button::social(&theme, status);
    }

    #[test]
    fn container_styles_follow_scroll_state() {
        let theme = Theme::Light;
        assert!(container::header(false)(&theme).background.is_none());
        assert!(container::header(true)(&theme).background.is_some());
        let _ = container::footer(&theme);
        let _ = overlay::backdrop(&theme);
        let _ = overlay::glyph(palette::WHITE)(&theme, svg::Status::Idle);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::TOUCH_TARGET >= 44.0);
    }

    #[test]
    fn every_glyph_round_trips_by_name() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_name(glyph.name()), *glyph);
        }
        assert_eq!(Glyph::from_name("no-such-glyph"), Glyph::HelpCircle);
    }

    #[test]
    fn light_and_dark_schemes_are_opposite() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        assert!(light.surface_primary.r > dark.surface_primary.r);
        assert!(light.text_primary.r < dark.text_primary.r);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
