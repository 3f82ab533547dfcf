// SPDX-License-Identifier: MPL-2.0
//! Viewer state machine.
//!
//! The viewer is either `Closed` or `Open` on one item of the current
//! filtered view. Every input source (buttons, keyboard, swipes) is reduced
//! to an [`Event`] before it reaches [`ViewerState::handle`], which performs
//! the transition and reports what changed as an [`Effect`].
//!
//! | State  | Event          | Next state            |
//! |--------|----------------|-----------------------|
//! | Closed | `Activate(id)` | `Open(id)`            |
//! | Open   | `Close`        | `Closed`              |
//! | Open   | `Advance`      | `Open(next(view))`    |
//! | Open   | `Retreat`      | `Open(previous(view))`|
//!
//! Any other pairing is ignored.

use crate::application::query::navigation::{self, Direction};
use crate::domain::media::{MediaId, MediaItem};

/// Input events of the viewer, independent of where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Open the viewer on an item of the current view.
    Activate(MediaId),
    /// Close the viewer.
    Close,
    /// Show the next item, wrapping at the end.
    Advance,
    /// Show the previous item, wrapping at the start.
    Retreat,
}

/// Outcome of a transition, consumed by the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The viewer went from closed to open on this item.
    Opened(MediaId),
    /// The viewer stayed open and now shows this item.
    Shown(MediaId),
    /// The viewer went from open to closed.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        item: MediaId,
    },
}

impl ViewerState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Id of the displayed item, if open.
    #[must_use]
    pub fn current(&self) -> Option<MediaId> {
        match self {
            Self::Open { item } => Some(*item),
            Self::Closed => None,
        }
    }

    /// Applies `event` against the current filtered `view`.
    pub fn handle(&mut self, event: Event, view: &[&MediaItem]) -> Effect {
        match (*self, event) {
            (Self::Closed, Event::Activate(id)) => {
                if navigation::position(view, id).is_none() {
                    log::warn!("ignoring activation of media {id}: not in the current view");
                    return Effect::None;
                }
                *self = Self::Open { item: id };
                Effect::Opened(id)
            }
            (Self::Open { .. }, Event::Close) => {
                *self = Self::Closed;
                Effect::Closed
            }
            (Self::Open { item }, Event::Advance) => self.step(view, item, Direction::Next),
            (Self::Open { item }, Event::Retreat) => self.step(view, item, Direction::Previous),
            (Self::Closed, _) | (Self::Open { .. }, Event::Activate(_)) => Effect::None,
        }
    }

    /// Re-checks the open item after the filtered view changed.
    ///
    /// The viewer closes if its item is no longer part of `view` and is left
    /// untouched otherwise.
    pub fn reconcile(&mut self, view: &[&MediaItem]) -> Effect {
        match *self {
            Self::Open { item } if navigation::position(view, item).is_none() => {
                log::debug!("closing viewer: media {item} left the filtered view");
                *self = Self::Closed;
                Effect::Closed
            }
            _ => Effect::None,
        }
    }

    fn step(&mut self, view: &[&MediaItem], current: MediaId, direction: Direction) -> Effect {
        debug_assert!(!view.is_empty(), "navigation on an empty view");
        if view.is_empty() {
            return Effect::None;
        }

        match navigation::step(view, current, direction) {
            Some(target) => {
                *self = Self::Open { item: target.id };
                Effect::Shown(target.id)
            }
            None => {
                log::debug!("closing viewer: media {current} is not in the current view");
                *self = Self::Closed;
                Effect::Closed
            }
        }
    }
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
    fn starts_closed() {
        let state = ViewerState::default();
        assert!(!state.is_open());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn activate_opens_on_item() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::default();

        let effect = state.handle(Event::Activate(MediaId(2)), &view);
        assert_eq!(effect, Effect::Opened(MediaId(2)));
        assert_eq!(state.current(), Some(MediaId(2)));
    }

    #[test]
    fn activate_outside_view_is_ignored() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::default();

        assert_eq!(state.handle(Event::Activate(MediaId(9)), &view), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn close_returns_to_closed() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::Open { item: MediaId(1) };

        assert_eq!(state.handle(Event::Close, &view), Effect::Closed);
        assert_eq!(state, ViewerState::Closed);
    }

    #[test]
    fn navigation_events_are_ignored_while_closed() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::default();

        assert_eq!(state.handle(Event::Advance, &view), Effect::None);
        assert_eq!(state.handle(Event::Retreat, &view), Effect::None);
        assert_eq!(state.handle(Event::Close, &view), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn activate_while_open_is_ignored() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::Open { item: MediaId(1) };

        assert_eq!(state.handle(Event::Activate(MediaId(3)), &view), Effect::None);
        assert_eq!(state.current(), Some(MediaId(1)));
    }

    #[test]
    fn advance_and_retreat_wrap() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::Open { item: MediaId(3) };

        assert_eq!(state.handle(Event::Advance, &view), Effect::Shown(MediaId(1)));
        assert_eq!(state.handle(Event::Retreat, &view), Effect::Shown(MediaId(3)));
    }

    #[test]
    fn navigation_from_missing_item_closes() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::Open { item: MediaId(7) };

        assert_eq!(state.handle(Event::Advance, &view), Effect::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn reconcile_keeps_item_still_in_view() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().collect();
        let mut state = ViewerState::Open { item: MediaId(2) };

        assert_eq!(state.reconcile(&view), Effect::None);
        assert_eq!(state.current(), Some(MediaId(2)));
    }

    #[test]
    fn reconcile_closes_when_item_left_view() {
        let items = items(3);
        let view: Vec<&MediaItem> = items.iter().filter(|i| i.id != MediaId(2)).collect();
        let mut state = ViewerState::Open { item: MediaId(2) };

        assert_eq!(state.reconcile(&view), Effect::Closed);
        assert!(!state.is_open());
    }
}
