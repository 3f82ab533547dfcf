// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer: the state machine and its full-window overlay.

pub mod lightbox;
pub mod state;

pub use state::{Effect, Event, ViewerState};

use iced::keyboard::{self, key::Named};

/// Maps a key to a viewer event. Only meaningful while the viewer is open.
#[must_use]
pub fn event_for_key(key: &keyboard::Key) -> Option<Event> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(Event::Close),
        keyboard::Key::Named(Named::ArrowRight) => Some(Event::Advance),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Event::Retreat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_map_to_events() {
        let named = |n| keyboard::Key::Named(n);
        assert_eq!(event_for_key(&named(Named::Escape)), Some(Event::Close));
        assert_eq!(event_for_key(&named(Named::ArrowRight)), Some(Event::Advance));
        assert_eq!(event_for_key(&named(Named::ArrowLeft)), Some(Event::Retreat));
    }

    #[test]
    fn other_keys_are_unmapped() {
        assert_eq!(event_for_key(&keyboard::Key::Named(Named::ArrowUp)), None);
        assert_eq!(event_for_key(&keyboard::Key::Named(Named::Enter)), None);
        assert_eq!(event_for_key(&keyboard::Key::Character("l".into())), None);
    }
}
