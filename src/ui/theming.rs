// SPDX-License-Identifier: MPL-2.0
//! Theme modes and the color schemes derived from them.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub page_background: Color,
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_accent: Color,

    // Overlay colors
    pub header_scrolled: Color,
    pub backdrop: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::GRAY_100,
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_300,
            border: palette::GRAY_300,

            text_primary: palette::SLATE_900,
            text_secondary: palette::GRAY_600,
            text_tertiary: palette::GRAY_500,

            brand_primary: palette::PRIMARY_600,
            brand_accent: palette::ACCENT_600,

            header_scrolled: Color {
                a: opacity::HEADER_SCROLLED,
                ..palette::WHITE
            },
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::SLATE_950
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::SLATE_950,
            surface_primary: palette::SLATE_900,
            surface_secondary: palette::SLATE_800,
            border: palette::SLATE_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,
            text_tertiary: palette::GRAY_500,

            brand_primary: palette::PRIMARY_600,
            brand_accent: palette::ACCENT_500,

            header_scrolled: Color {
                a: opacity::HEADER_SCROLLED,
                ..palette::SLATE_950
            },
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching an Iced theme, judged by its background luminance.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let bg = theme.extended_palette().background.base.color;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
