// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

/// Full-window backdrop behind the lightbox.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.backdrop)),
        text_color: Some(colors.overlay_text),
        ..Default::default()
    }
}

/// Caption strip at the bottom of the displayed media.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..Color::BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small indicator pill (position counter, tile type badge).
pub fn indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..Color::BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_LIGHT,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Tints an SVG glyph with a fixed color.
pub fn glyph(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

/// Tints an SVG glyph with the theme's primary text color.
pub fn glyph_text(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}
