// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery.
//!
//! Filtering is a pure function of the catalog and the selected category and
//! always preserves catalog order. The `Video` category is special: it acts
//! both as an explicit category tag and as a media-kind filter, so video
//! clips tagged with another category still show up under it.

use super::types::{Category, MediaItem, MediaKind};

/// Returns `true` if `item` belongs to the view for `category`.
#[must_use]
pub fn matches(category: Category, item: &MediaItem) -> bool {
    match category {
        Category::All => true,
        Category::Video => item.category == Category::Video || item.kind == MediaKind::Video,
        other => item.category == other,
    }
}

/// Returns the items visible under `category`, in catalog order.
///
/// An empty result is valid; callers render an empty state for it.
#[must_use]
pub fn filter(items: &[MediaItem], category: Category) -> Vec<&MediaItem> {
    items.iter().filter(|item| matches(category, item)).collect()
}

/// Number of items visible under `category`.
#[must_use]
pub fn count(items: &[MediaItem], category: Category) -> usize {
    items.iter().filter(|item| matches(category, item)).count()
}

/// Currently selected category.
///
/// Starts at [`Category::All`] and only changes on explicit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    category: Category,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Selects `category`. Returns `true` if the selection changed.
    pub fn select(&mut self, category: Category) -> bool {
        let changed = self.category != category;
        self.category = category;
        changed
    }
}
