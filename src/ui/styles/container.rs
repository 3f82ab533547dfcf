// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Whole-page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Fixed header; transparent at the top of the page, opaque once scrolled.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        if !scrolled {
            return container::Style {
                text_color: Some(colors.text_primary),
                ..Default::default()
            };
        }
        container::Style {
            background: Some(Background::Color(colors.header_scrolled)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..colors.border
                },
                width: border::WIDTH_SM,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        }
    }
}

/// Alternate section band (about section).
pub fn band(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.surface_primary
        })),
        ..Default::default()
    }
}

/// Raised card with a thin border.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Pill-shaped badge tinted with `accent`.
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        text_color: Some(accent),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_LIGHT,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Square icon holder tinted with `accent` (feature cards).
pub fn icon_tile(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        text_color: Some(accent),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Brand mark behind the aperture glyph.
pub fn brand_mark(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gallery tile frame while the thumbnail is loading or failed.
pub fn tile_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_tertiary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer strip.
pub fn footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_secondary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..colors.border
            },
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
