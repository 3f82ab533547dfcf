// SPDX-License-Identifier: MPL-2.0
//! Wrap-around navigation inside a filtered view.
//!
//! A view is the ordered slice of items produced by category filtering. The
//! current item is located by id, so the functions work on any view that
//! contains it regardless of where it came from. They never mutate anything;
//! the caller decides what to do with the returned item.
//!
//! Navigating an empty view is a caller bug: it trips a `debug_assert!` in
//! debug builds and is a no-op (`None`) in release builds.

use crate::domain::media::{MediaId, MediaItem};

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Navigation state information for UI rendering.
///
/// A snapshot of where the current item sits in its view, used to render
/// the position counter and to decide whether the arrows are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Position of the current item (0-indexed), if it is in the view.
    pub current_index: Option<usize>,
    /// Number of items in the view.
    pub total_count: usize,
}

impl NavigationInfo {
    /// Builds the snapshot for `current` inside `view`.
    #[must_use]
    pub fn of(view: &[&MediaItem], current: MediaId) -> Self {
        Self {
            current_index: position(view, current),
            total_count: view.len(),
        }
    }

    /// Whether arrows should be offered. A single-item view wraps onto itself.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.current_index.is_some() && self.total_count > 1
    }
}

/// Position of the item with id `current` in `view`.
#[must_use]
pub fn position(view: &[&MediaItem], current: MediaId) -> Option<usize> {
    view.iter().position(|item| item.id == current)
}

/// Item after `current`, wrapping from the last item to the first.
///
/// Returns `None` if `current` is not part of `view`.
#[must_use]
pub fn next<'a>(view: &[&'a MediaItem], current: MediaId) -> Option<&'a MediaItem> {
    step(view, current, Direction::Next)
}

/// Item before `current`, wrapping from the first item to the last.
///
/// Returns `None` if `current` is not part of `view`.
#[must_use]
pub fn previous<'a>(view: &[&'a MediaItem], current: MediaId) -> Option<&'a MediaItem> {
    step(view, current, Direction::Previous)
}

/// Moves one step from `current` in `direction`, wrapping at both ends.
#[must_use]
pub fn step<'a>(
    view: &[&'a MediaItem],
    current: MediaId,
    direction: Direction,
) -> Option<&'a MediaItem> {
    debug_assert!(!view.is_empty(), "navigation on an empty view");
    let len = view.len();
    if len == 0 {
        return None;
    }

    let index = position(view, current)?;
    let target = match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    };
    Some(view[target])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{Category, DisplayShape, MediaKind};

    fn items(count: u32) -> Vec<MediaItem> {
        (1..=count)
            .map(|id| MediaItem {
                id: MediaId(id),
                kind: MediaKind::Photo,
                full_url: "https://example.test/full",
                thumbnail_url: "https://example.test/thumb",
                title: "item",
                category: Category::Portfolio,
                shape: DisplayShape::Landscape,
            })
            .collect()
    }

    #[test]
    fn next_moves_forward() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        assert_eq!(next(&view, MediaId(1)).map(|i| i.id), Some(MediaId(2)));
        assert_eq!(next(&view, MediaId(2)).map(|i| i.id), Some(MediaId(3)));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let items = items(4);
        let view: Vec<&MediaItem> = items.iter().collect();
        assert_eq!(next(&view, MediaId(4)).map(|i| i.id), Some(MediaId(1)));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let items = items(4);
        let view: Vec<&MediaItem> = items.iter().collect();
        assert_eq!(previous(&view, MediaId(1)).map(|i| i.id), Some(MediaId(4)));
        assert_eq!(previous(&view, MediaId(3)).map(|i| i.id), Some(MediaId(2)));
    }

    #[test]
    fn round_trips_return_to_start() {
        let items = items(5);
        let view: Vec<&MediaItem> = items.iter().collect();
        for item in &view {
            let forward = next(&view, item.id).expect("item is in view");
            assert_eq!(previous(&view, forward.id).map(|i| i.id), Some(item.id));

            let backward = previous(&view, item.id).expect("item is in view");
            assert_eq!(next(&view, backward.id).map(|i| i.id), Some(item.id));
        }
    }

    #[test]
    fn single_item_view_wraps_onto_itself() {
        let items = items(1);
        let view: Vec<&MediaItem> = items.iter().collect();
        assert_eq!(next(&view, MediaId(1)).map(|i| i.id), Some(MediaId(1)));
        assert_eq!(previous(&view, MediaId(1)).map(|i| i.id), Some(MediaId(1)));
    }

    #[test]
    fn absent_item_yields_none() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        assert!(next(&view, MediaId(9)).is_none());
        assert!(previous(&view, MediaId(9)).is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "navigation on an empty view")]
    fn empty_view_fails_fast_in_debug() {
        let view: Vec<&MediaItem> = Vec::new();
        let _ = next(&view, MediaId(1));
    }

    #[test]
    fn navigation_info_locates_item() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();

        let last = NavigationInfo::of(&view, MediaId(3));
        assert_eq!(last.current_index, Some(2));
        assert_eq!(last.total_count, 3);
        assert!(last.can_navigate());

        let single = &view[..1];
        assert!(!NavigationInfo::of(single, MediaId(1)).can_navigate());
    }

    #[test]
    fn navigation_info_for_absent_item() {
        let items = items(2);
        let view: Vec<&MediaItem> = items.iter().collect();
        let info = NavigationInfo::of(&view, MediaId(7));
        assert_eq!(info.current_index, None);
        assert!(!info.can_navigate());
    }
}
