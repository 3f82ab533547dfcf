// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and page-section sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a backdrop color
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::SLATE_950
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Page scroll anchors are computed from the fixed section heights in
[`sizing`]. Changing a section height changes where its anchor lands.
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
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Slate surfaces
    pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);

    // Brand colors (blue scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Accent colors (purple scale)
    pub const ACCENT_500: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const ACCENT_600: Color = Color::from_rgb(0.576, 0.200, 0.918);

    // Semantic colors
    pub const SUCCESS_400: Color = Color::from_rgb(0.290, 0.871, 0.502);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_LIGHT: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Header background once the page has scrolled.
    pub const HEADER_SCROLLED: f32 = 0.9;

    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 96.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;
    pub const ICON_XL: f32 = 32.0;
    pub const ICON_XXL: f32 = 64.0;

    // Interactive element heights
    /// Minimum touch target (WCAG 2.5.5)
    pub const TOUCH_TARGET: f32 = 48.0;
    /// Call-to-action buttons in hero and contact
    pub const CTA_HEIGHT: f32 = 56.0;

    // Brand mark
    pub const BRAND_MARK: f32 = 40.0;
    pub const BRAND_MARK_SM: f32 = 32.0;

    // Gallery grid
    /// Content width of the page sections
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

    // Lightbox
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1100.0;
    pub const LIGHTBOX_MAX_HEIGHT: f32 = 720.0;

    // Page sections (fixed heights, used to compute scroll anchors)
    pub const HEADER_HEIGHT: f32 = 72.0;
    pub const HERO_HEIGHT: f32 = 560.0;
    pub const ABOUT_HEIGHT: f32 = 520.0;
    pub const CONTACT_HEIGHT: f32 = 420.0;
    pub const FOOTER_HEIGHT: f32 = 140.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: Hero title
    //! - Titles: Section headings
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Display - Hero title
    pub const DISPLAY: f32 = 56.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 40.0;

    /// Medium title - Brand name, stats
    pub const TITLE_MD: f32 = 24.0;

    /// Small title - Card headings, lightbox title
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Hero lede
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 16.0;

    /// Small body - Labels, secondary text
    pub const BODY_SM: f32 = 14.0;

    /// Caption - Badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, chips
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Glow under the active category chip.
    pub const PRIMARY_GLOW: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::PRIMARY_600
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::TOUCH_TARGET >= 44.0);
    assert!(sizing::HERO_HEIGHT > sizing::HEADER_HEIGHT);
    assert!(sizing::ABOUT_HEIGHT > 0.0);
    assert!(sizing::CONTACT_HEIGHT > 0.0);
    assert!(sizing::FOOTER_HEIGHT > 0.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn overlay_opacities_ascend() {
        assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_LIGHT);
        assert!(opacity::OVERLAY_LIGHT < opacity::OVERLAY_MEDIUM);
        assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    }

    #[test]
    fn brand_colors_are_blue() {
        assert!(palette::PRIMARY_600.b > palette::PRIMARY_600.r);
        assert!(palette::ACCENT_500.b > palette::ACCENT_500.g);
    }
}
