// SPDX-License-Identifier: MPL-2.0
//! Glyph registry.
//!
//! Every glyph the page can show is a variant of the closed [`Glyph`] enum
//! backed by an SVG embedded at compile time. Symbolic names coming from the
//! catalog or page layout resolve through [`Glyph::from_name`], which always
//! yields something renderable: unknown names fall back to
//! [`Glyph::HelpCircle`].
//!
//! Handles are built once on first access and cached in a `OnceLock`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::glyphs::{self, Glyph};
//!
//! let close = glyphs::icon(Glyph::Close, sizing::ICON_LG);
//! let tab = glyphs::icon(Glyph::from_name("grid-3x3"), sizing::ICON_SM);
//! ```

use iced::widget::svg::{self, Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines the glyph enum, its names and its SVG sources in one place.
///
/// The first name of each entry is canonical; the others are accepted aliases.
/// SVG bodies are drawn on a 24x24 grid with a 2px round stroke.
macro_rules! define_glyphs {
    ($( $variant:ident [$canonical:literal $(, $alias:literal)*] => $body:literal; )+) => {
        /// A renderable icon.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Glyph {
            $($variant,)+
        }

        impl Glyph {
            /// Every glyph, in declaration order.
            pub const ALL: &'static [Glyph] = &[$(Glyph::$variant,)+];

            /// Canonical kebab-case name.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Glyph::$variant => $canonical,)+
                }
            }

            /// Resolves a symbolic name, falling back to [`Glyph::HelpCircle`].
            #[must_use]
            pub fn from_name(name: &str) -> Glyph {
                match name {
                    $($canonical $(| $alias)* => Glyph::$variant,)+
                    unknown => {
                        log::debug!("unknown glyph name {unknown:?}, using fallback");
                        Glyph::HelpCircle
                    }
                }
            }

            fn source(self) -> &'static str {
                match self {
                    $(Glyph::$variant => concat!(
                        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" ",
                        "viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"black\" stroke-width=\"2\" ",
                        "stroke-linecap=\"round\" stroke-linejoin=\"round\">",
                        $body,
                        "</svg>"
                    ),)+
                }
            }
        }
    };
}

define_glyphs! {
    Grid ["grid", "grid-3x3"] =>
        "<rect x=\"3\" y=\"3\" width=\"18\" height=\"18\" rx=\"2\"/><path d=\"M3 9h18M3 15h18M9 3v18M15 3v18\"/>";
    Image ["image"] =>
        "<rect x=\"3\" y=\"3\" width=\"18\" height=\"18\" rx=\"2\"/><circle cx=\"9\" cy=\"9\" r=\"2\"/><path d=\"m21 15-3.1-3.1a2 2 0 0 0-2.8 0L6 21\"/>";
    Video ["video"] =>
        "<path d=\"m16 13 5.2 3.5a.5.5 0 0 0 .8-.4V7.9a.5.5 0 0 0-.8-.4L16 11\"/><rect x=\"2\" y=\"6\" width=\"14\" height=\"12\" rx=\"2\"/>";
    Mountain ["mountain"] =>
        "<path d=\"m8 3 4 8 5-5 5 15H2L8 3z\"/>";
    Close ["close", "x"] =>
        "<path d=\"M18 6 6 18M6 6l12 12\"/>";
    ChevronLeft ["chevron-left"] =>
        "<path d=\"m15 18-6-6 6-6\"/>";
    ChevronRight ["chevron-right"] =>
        "<path d=\"m9 18 6-6-6-6\"/>";
    MoveLeft ["move-left"] =>
        "<path d=\"M6 8 2 12l4 4M2 12h20\"/>";
    MoveRight ["move-right"] =>
        "<path d=\"m18 8 4 4-4 4M2 12h20\"/>";
    Play ["play"] =>
        "<path d=\"M6 3l14 9-14 9V3z\"/>";
    Sparkles ["sparkles"] =>
        "<path d=\"M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9L12 3z\"/><path d=\"M20 3v4M22 5h-4M4 17v2M5 18H3\"/>";
    Aperture ["aperture"] =>
        "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"m14.3 8 5.7 9.9M9.7 8h11.5M7.4 12l5.7-9.9M9.7 16 3.9 6.1M14.3 16H2.8M16.6 12l-5.7 9.9\"/>";
    Images ["images"] =>
        "<path d=\"M18 22H4a2 2 0 0 1-2-2V6\"/><rect x=\"6\" y=\"2\" width=\"16\" height=\"16\" rx=\"2\"/><circle cx=\"12\" cy=\"8\" r=\"2\"/><path d=\"m22 13-1.3-1.3a2 2 0 0 0-2.8 0L10 20\"/>";
    Share ["share", "share-2"] =>
        "<circle cx=\"18\" cy=\"5\" r=\"3\"/><circle cx=\"6\" cy=\"12\" r=\"3\"/><circle cx=\"18\" cy=\"19\" r=\"3\"/><path d=\"m8.6 13.5 6.8 4M15.4 6.5l-6.8 4\"/>";
    Info ["info"] =>
        "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"M12 16v-4M12 8h.01\"/>";
    Zap ["zap"] =>
        "<path d=\"M13 2 3 14h9l-1 8 10-12h-9l1-8z\"/>";
    Smartphone ["smartphone"] =>
        "<rect x=\"5\" y=\"2\" width=\"14\" height=\"20\" rx=\"2\"/><path d=\"M12 18h.01\"/>";
    CheckCircle ["check-circle"] =>
        "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"m9 12 2 2 4-4\"/>";
    Mail ["mail"] =>
        "<rect x=\"2\" y=\"4\" width=\"20\" height=\"16\" rx=\"2\"/><path d=\"m22 7-10 6L2 7\"/>";
    Download ["download"] =>
        "<path d=\"M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3\"/>";
    Instagram ["instagram"] =>
        "<rect x=\"2\" y=\"2\" width=\"20\" height=\"20\" rx=\"5\"/><circle cx=\"12\" cy=\"12\" r=\"4\"/><path d=\"M17.5 6.5h.01\"/>";
    Twitter ["twitter"] =>
        "<path d=\"M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z\"/>";
    Facebook ["facebook"] =>
        "<path d=\"M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z\"/>";
    Youtube ["youtube"] =>
        "<path d=\"M2.5 17a24 24 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.6 49.6 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24 24 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.6 49.6 0 0 1-16.2 0A2 2 0 0 1 2.5 17\"/><path d=\"m10 15 5-3-5-3z\"/>";
    Menu ["menu"] =>
        "<path d=\"M4 6h16M4 12h16M4 18h16\"/>";
    ImageOff ["image-off"] =>
        "<path d=\"m2 2 20 20M10.4 5H19a2 2 0 0 1 2 2v8.6M21 19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2\"/><path d=\"m3 15 4-4 3 3m4-4 .5-.5\"/>";
    HelpCircle ["help-circle"] =>
        "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3M12 17h.01\"/>";
}

impl Glyph {
    /// Cached SVG handle of this glyph.
    #[must_use]
    pub fn handle(self) -> Handle {
        static HANDLES: OnceLock<Vec<Handle>> = OnceLock::new();
        let handles = HANDLES.get_or_init(|| {
            Glyph::ALL
                .iter()
                .map(|glyph| Handle::from_memory(glyph.source().as_bytes()))
                .collect()
        });
        handles[self as usize].clone()
    }
}

/// Square SVG widget for `glyph` at `size` pixels.
pub fn icon<'a>(glyph: Glyph, size: f32) -> Svg<'a> {
    svg::Svg::new(glyph.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Glyph::from_name("grid-3x3"), Glyph::Grid);
        assert_eq!(Glyph::from_name("share-2"), Glyph::Share);
        assert_eq!(Glyph::from_name("x"), Glyph::Close);
        assert_eq!(Glyph::from_name("image-off"), Glyph::ImageOff);
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(Glyph::from_name("does-not-exist"), Glyph::HelpCircle);
        assert_eq!(Glyph::from_name(""), Glyph::HelpCircle);
    }

    #[test]
    fn canonical_names_round_trip_and_are_unique() {
        let mut seen = HashSet::new();
        for glyph in Glyph::ALL {
            assert!(seen.insert(glyph.name()), "duplicate name {}", glyph.name());
            assert_eq!(Glyph::from_name(glyph.name()), *glyph);
        }
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (index, glyph) in Glyph::ALL.iter().enumerate() {
            assert_eq!(*glyph as usize, index);
        }
    }

    #[test]
    fn sources_are_complete_svg_documents() {
        for glyph in Glyph::ALL {
            let source = glyph.source();
            assert!(source.starts_with("<svg"));
            assert!(source.ends_with("</svg>"));
        }
    }
}
