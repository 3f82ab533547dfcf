// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action button (hero "View gallery", contact "Write to us").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Secondary button on a raised surface with a thin border.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.border,
        _ => colors.surface_secondary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Category chip; the active category gets the brand fill and a glow.
pub fn category_chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        if active {
            return button::Style {
                background: Some(Background::Color(colors.brand_primary)),
                text_color: WHITE,
                border: Border {
                    color: colors.brand_primary,
                    width: 0.0,
                    radius: radius::MD.into(),
                },
                shadow: shadow::PRIMARY_GLOW,
                snap: true,
            };
        }

        let (background, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed => {
                (colors.surface_secondary, colors.text_primary)
            }
            _ => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..colors.surface_secondary
                },
                colors.text_secondary,
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..colors.border
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text link (header anchors, footer links).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_primary,
        _ => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Gallery tile: no chrome, the thumbnail is the button.
pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent button on top of the lightbox backdrop.
pub fn overlay(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_LIGHT,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: colors.overlay_text,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round social-network button in the contact section.
pub fn social(theme: &Theme, status: button::Status) -> button::Style {
    let style = secondary(theme, status);
    button::Style {
        border: Border {
            radius: radius::FULL.into(),
            ..style.border
        },
        text_color: ColorScheme::for_theme(theme).text_secondary,
        ..style
    }
}
