// SPDX-License-Identifier: MPL-2.0
//! The static media catalog.
//!
//! A [`Catalog`] is an ordered, read-only list of [`MediaItem`]s whose ids are
//! unique. It is validated once at construction and never mutated afterwards.

use super::types::{Category, DisplayShape, MediaId, MediaItem, MediaKind};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::sync::OnceLock;

const ASSET_BASE: &str =
    "https://oejgkvftpbinliuopipr.supabase.co/storage/v1/object/public/assets/user_347995964";

const PHOTO_1: &str = concat!(
    "https://oejgkvftpbinliuopipr.supabase.co/storage/v1/object/public/assets/user_347995964",
    "/user-photo-1.jpg?"
);
const VIDEO_2: &str = concat!(
    "https://oejgkvftpbinliuopipr.supabase.co/storage/v1/object/public/assets/user_347995964",
    "/user-video-2.MOV?"
);
const PHOTO_3: &str = concat!(
    "https://oejgkvftpbinliuopipr.supabase.co/storage/v1/object/public/assets/user_347995964",
    "/user-photo-3.jpg?"
);
const PHOTO_4: &str = concat!(
    "https://oejgkvftpbinliuopipr.supabase.co/storage/v1/object/public/assets/user_347995964",
    "/user-photo-4.jpg?"
);
/// Looping clip shown in the gallery and in the about section.
pub const ANIMATION_5: &str = concat!(
    "https://oejgkvftpbinliuopipr.supabase.co/storage/v1/object/public/assets/user_347995964",
    "/edit-animation-1770406522-5232.mp4?"
);

/// Ordered, validated, read-only collection of media items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MediaItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] naming the first duplicated id.
    pub fn new(items: Vec<MediaItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(Error::Catalog(format!("duplicate media id {}", item.id)));
            }
        }
        Ok(Self { items })
    }

    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            items: builtin_items(),
        })
    }

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: MediaId) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Base location of the hosted assets, logged at startup.
    #[must_use]
    pub fn asset_base() -> &'static str {
        ASSET_BASE
    }
}

fn builtin_items() -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: MediaId(1),
            kind: MediaKind::Photo,
            full_url: PHOTO_1,
            thumbnail_url: PHOTO_1,
            title: "Момент 1",
            category: Category::Portfolio,
            shape: DisplayShape::Landscape,
        },
        MediaItem {
            id: MediaId(2),
            kind: MediaKind::Video,
            full_url: VIDEO_2,
            thumbnail_url: PHOTO_1,
            title: "Видео момент",
            category: Category::Video,
            shape: DisplayShape::Widescreen,
        },
        MediaItem {
            id: MediaId(3),
            kind: MediaKind::Photo,
            full_url: PHOTO_3,
            thumbnail_url: PHOTO_3,
            title: "Момент 2",
            category: Category::Portfolio,
            shape: DisplayShape::Portrait,
        },
        MediaItem {
            id: MediaId(4),
            kind: MediaKind::Photo,
            full_url: PHOTO_4,
            thumbnail_url: PHOTO_4,
            title: "Момент 3",
            category: Category::Nature,
            shape: DisplayShape::Landscape,
        },
        MediaItem {
            id: MediaId(5),
            kind: MediaKind::AnimatedImage,
            full_url: ANIMATION_5,
            thumbnail_url: ANIMATION_5,
            title: "Анимация",
            category: Category::Portfolio,
            shape: DisplayShape::Widescreen,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::filter;

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let items = Catalog::builtin().items().to_vec();
        assert!(Catalog::new(items).is_ok());
    }

    #[test]
    fn builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        let ids: Vec<u32> = catalog.items().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(catalog.items().iter().all(|i| i.full_url.starts_with(Catalog::asset_base())));
    }

    #[test]
    fn builtin_video_view_has_single_clip() {
        let view = filter::filter(Catalog::builtin().items(), Category::Video);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, MediaId(2));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut items = builtin_items();
        items.push(items[0].clone());
        let err = Catalog::new(items).unwrap_err();
        assert_eq!(err, Error::Catalog("duplicate media id 1".to_string()));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(MediaId(4)).map(|i| i.title), Some("Момент 3"));
        assert!(catalog.get(MediaId(42)).is_none());
    }
}
