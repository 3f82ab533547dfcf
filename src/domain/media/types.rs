// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Stable identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(pub u32);

impl MediaId {
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of rendition a catalog entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still photograph.
    Photo,
    /// Video clip. Only its poster is rendered in-app.
    Video,
    /// Looping animation (GIF-like).
    AnimatedImage,
}

impl MediaKind {
    /// Fluent key of the caption shown under the viewer title.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Photo => "media-kind-photo",
            Self::Video => "media-kind-video",
            Self::AnimatedImage => "media-kind-animated",
        }
    }
}

/// Gallery categories, including the `All` sentinel that matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Portfolio,
    Video,
    Nature,
}

impl Category {
    /// Categories in the order the category bar shows them.
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Portfolio,
        Category::Video,
        Category::Nature,
    ];

    /// Stable string id (`"all"`, `"portfolio"`, ...).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Portfolio => "portfolio",
            Self::Video => "video",
            Self::Nature => "nature",
        }
    }

    /// Fluent key of the category label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "category-all",
            Self::Portfolio => "category-portfolio",
            Self::Video => "category-video",
            Self::Nature => "category-nature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Aspect hint for the preview tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayShape {
    /// 4:3
    #[default]
    Landscape,
    /// 3:4
    Portrait,
    /// 16:9
    Widescreen,
}

impl DisplayShape {
    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        match self {
            Self::Landscape => 4.0 / 3.0,
            Self::Portrait => 3.0 / 4.0,
            Self::Widescreen => 16.0 / 9.0,
        }
    }

    /// Tile height for a given tile width.
    #[must_use]
    pub fn height_for_width(self, width: f32) -> f32 {
        width / self.aspect_ratio()
    }
}

/// One entry of the static catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    pub full_url: &'static str,
    pub thumbnail_url: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub shape: DisplayShape,
}

impl MediaItem {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Locator the viewer should render. Videos show their poster.
    #[must_use]
    pub fn viewer_url(&self) -> &'static str {
        match self.kind {
            MediaKind::Video => self.thumbnail_url,
            MediaKind::Photo | MediaKind::AnimatedImage => self.full_url,
        }
    }
}

/// Decoded RGBA pixels without presentation dependencies.
///
/// The presentation layer converts this into an `iced::widget::image::Handle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Consumes the image and returns its pixel buffer, copying only if shared.
    #[must_use]
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        Arc::try_unwrap(self.rgba_bytes).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Size in bytes of the pixel buffer.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.rgba_bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let err = "landscape".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("landscape".to_string()));
    }

    #[test]
    fn default_category_is_all() {
        assert_eq!(Category::default(), Category::All);
    }

    #[test]
    fn display_shape_heights() {
        assert!((DisplayShape::Landscape.height_for_width(400.0) - 300.0).abs() < f32::EPSILON);
        assert!((DisplayShape::Portrait.height_for_width(300.0) - 400.0).abs() < 0.001);
        assert!((DisplayShape::Widescreen.height_for_width(320.0) - 180.0).abs() < 0.001);
    }

    #[test]
    fn video_viewer_url_is_poster() {
        let item = MediaItem {
            id: MediaId(2),
            kind: MediaKind::Video,
            full_url: "https://example.test/clip.mov",
            thumbnail_url: "https://example.test/poster.jpg",
            title: "clip",
            category: Category::Video,
            shape: DisplayShape::Widescreen,
        };
        assert_eq!(item.viewer_url(), "https://example.test/poster.jpg");
    }

    #[test]
    #[should_panic(expected = "RGBA data length mismatch")]
    fn raw_image_rejects_short_buffer() {
        let _ = RawImage::from_rgba(2, 2, vec![0; 4]);
    }

    #[test]
    fn raw_image_reports_dimensions() {
        let image = RawImage::from_rgba(3, 2, vec![255; 24]);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.byte_len(), 24);
    }
}
