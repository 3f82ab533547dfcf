// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating the category filter, the viewer state
//! machine and the swipe gesture tracker.
//!
//! All inputs are reduced to viewer [`Event`]s and applied against the
//! filtered view of the moment; the resulting [`Effect`] tells the
//! application what changed.

use crate::application::query::NavigationInfo;
use crate::domain::media::filter;
use crate::domain::media::{Catalog, Category, FilterState, MediaId, MediaItem};
use crate::ui::state::{Swipe, SwipeGesture};
use crate::ui::viewer::{self, Effect, Event, ViewerState};
use iced::keyboard;
use iced::touch::{self, Finger};

/// Messages emitted by the gallery grid, the category bar and the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(Category),
    TileActivated(MediaId),
    CloseRequested,
    NextRequested,
    PreviousRequested,
    KeyPressed(keyboard::Key),
    Touch(touch::Event),
}

/// Gallery state: one catalog, one active category, one viewer.
#[derive(Debug, Clone)]
pub struct State {
    catalog: Catalog,
    filter: FilterState,
    viewer: ViewerState,
    gesture: SwipeGesture,
    finger: Option<Finger>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Catalog::builtin().clone(), SwipeGesture::default().threshold())
    }
}

impl State {
    #[must_use]
    pub fn new(catalog: Catalog, swipe_threshold: f32) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
            viewer: ViewerState::default(),
            gesture: SwipeGesture::new(swipe_threshold),
            finger: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.filter.category()
    }

    #[must_use]
    pub fn viewer(&self) -> ViewerState {
        self.viewer
    }

    #[must_use]
    pub fn gesture(&self) -> &SwipeGesture {
        &self.gesture
    }

    /// Items of the active category, in catalog order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&MediaItem> {
        filter::filter(self.catalog.items(), self.filter.category())
    }

    /// Item shown in the lightbox, if open.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.viewer.current().and_then(|id| self.catalog.get(id))
    }

    /// Position of the open item in the filtered view.
    #[must_use]
    pub fn navigation_info(&self) -> Option<NavigationInfo> {
        let current = self.viewer.current()?;
        Some(NavigationInfo::of(&self.filtered_view(), current))
    }

    /// Switches category and closes the viewer if its item left the view.
    pub fn select_category(&mut self, category: Category) -> Effect {
        if !self.filter.select(category) {
            return Effect::None;
        }
        log::debug!("category changed to {category}");
        let view = filter::filter(self.catalog.items(), self.filter.category());
        self.viewer.reconcile(&view)
    }

    /// Applies a viewer event against the current filtered view.
    pub fn dispatch(&mut self, event: Event) -> Effect {
        let view = filter::filter(self.catalog.items(), self.filter.category());
        let effect = self.viewer.handle(event, &view);
        if effect == Effect::Closed {
            self.release_finger();
        }
        effect
    }

    /// Handles a key press. Returns `None` while closed or for unmapped keys.
    pub fn key_pressed(&mut self, key: &keyboard::Key) -> Option<Effect> {
        if !self.viewer.is_open() {
            return None;
        }
        let event = viewer::event_for_key(key)?;
        Some(self.dispatch(event))
    }

    /// A finger touched down. Only the first finger is tracked.
    pub fn touch_started(&mut self, finger: Finger, x: f32) {
        if self.finger.is_some() {
            return;
        }
        self.finger = Some(finger);
        self.gesture.start(x);
    }

    /// The tracked finger moved.
    pub fn touch_moved(&mut self, finger: Finger, x: f32) {
        if self.finger == Some(finger) {
            self.gesture.moved(x);
        }
    }

    /// The tracked finger lifted; a completed swipe navigates.
    pub fn touch_finished(&mut self, finger: Finger) -> Effect {
        if self.finger != Some(finger) {
            return Effect::None;
        }
        let swipe = self.gesture.finish();
        self.release_finger();

        match swipe {
            Some(Swipe::Advance) => self.dispatch(Event::Advance),
            Some(Swipe::Retreat) => self.dispatch(Event::Retreat),
            None => Effect::None,
        }
    }

    /// The tracked finger was lost (e.g. window focus change).
    pub fn touch_lost(&mut self, finger: Finger) {
        if self.finger == Some(finger) {
            self.release_finger();
        }
    }

    fn release_finger(&mut self) {
        self.finger = None;
        self.gesture.cancel();
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::CategorySelected(category) => self.select_category(category),
            Message::TileActivated(id) => self.dispatch(Event::Activate(id)),
            Message::CloseRequested => self.dispatch(Event::Close),
            Message::NextRequested => self.dispatch(Event::Advance),
            Message::PreviousRequested => self.dispatch(Event::Retreat),
            Message::KeyPressed(key) => self.key_pressed(&key).unwrap_or(Effect::None),
            Message::Touch(event) => match event {
                touch::Event::FingerPressed { id, position } => {
                    self.touch_started(id, position.x);
                    Effect::None
                }
                touch::Event::FingerMoved { id, position } => {
                    self.touch_moved(id, position.x);
                    Effect::None
                }
                touch::Event::FingerLifted { id, .. } => self.touch_finished(id),
                touch::Event::FingerLost { id, .. } => {
                    self.touch_lost(id);
                    Effect::None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::Point;

    const FINGER: Finger = Finger(1);

    fn gallery() -> State {
        State::default()
    }

    fn open(state: &mut State, id: u32) {
        assert_eq!(
            state.handle(Message::TileActivated(MediaId(id))),
            Effect::Opened(MediaId(id))
        );
    }

    fn arrow_right() -> keyboard::Key {
        keyboard::Key::Named(Named::ArrowRight)
    }

    #[test]
    fn starts_on_all_with_viewer_closed() {
        let state = gallery();
        assert_eq!(state.category(), Category::All);
        assert_eq!(state.filtered_view().len(), 5);
        assert!(!state.viewer().is_open());
        assert_eq!(state.navigation_info(), None);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut state = gallery();
        assert_eq!(state.key_pressed(&arrow_right()), None);
        assert!(!state.viewer().is_open());
    }

    #[test]
    fn unmapped_key_is_none_while_open() {
        let mut state = gallery();
        open(&mut state, 1);
        let key = keyboard::Key::Character("a".into());
        assert_eq!(state.key_pressed(&key), None);
        assert_eq!(state.viewer().current(), Some(MediaId(1)));
    }

    #[test]
    fn escape_closes() {
        let mut state = gallery();
        open(&mut state, 3);
        let escape = keyboard::Key::Named(Named::Escape);
        assert_eq!(state.key_pressed(&escape), Some(Effect::Closed));
    }

    #[test]
    fn category_change_keeps_viewer_when_item_stays() {
        let mut state = gallery();
        open(&mut state, 3);
        assert_eq!(
            state.handle(Message::CategorySelected(Category::Portfolio)),
            Effect::None
        );
        assert_eq!(state.viewer().current(), Some(MediaId(3)));
        let info = state.navigation_info().expect("open");
        assert_eq!(info.total_count, 3);
        assert_eq!(info.current_index, Some(1));
    }

    #[test]
    fn category_change_closes_viewer_when_item_leaves() {
        let mut state = gallery();
        open(&mut state, 4);
        assert_eq!(
            state.handle(Message::CategorySelected(Category::Video)),
            Effect::Closed
        );
        assert!(!state.viewer().is_open());
    }

    #[test]
    fn reselecting_same_category_is_a_no_op() {
        let mut state = gallery();
        assert_eq!(state.select_category(Category::All), Effect::None);
    }

    #[test]
    fn touch_swipe_left_advances() {
        let mut state = gallery();
        open(&mut state, 3);

        state.handle(Message::Touch(touch::Event::FingerPressed {
            id: FINGER,
            position: Point::new(300.0, 10.0),
        }));
        state.handle(Message::Touch(touch::Event::FingerMoved {
            id: FINGER,
            position: Point::new(200.0, 10.0),
        }));
        let effect = state.handle(Message::Touch(touch::Event::FingerLifted {
            id: FINGER,
            position: Point::new(200.0, 10.0),
        }));

        assert_eq!(effect, Effect::Shown(MediaId(4)));
        assert!(!state.gesture().is_tracking());
    }

    #[test]
    fn lift_without_move_is_not_a_swipe() {
        let mut state = gallery();
        open(&mut state, 3);

        state.handle(Message::Touch(touch::Event::FingerPressed {
            id: FINGER,
            position: Point::new(300.0, 10.0),
        }));
        let effect = state.handle(Message::Touch(touch::Event::FingerLifted {
            id: FINGER,
            position: Point::new(200.0, 10.0),
        }));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.viewer().current(), Some(MediaId(3)));
        assert!(!state.gesture().is_tracking());
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut state = gallery();
        open(&mut state, 1);

        state.touch_started(FINGER, 300.0);
        state.touch_started(Finger(2), 10.0);
        state.touch_moved(Finger(2), 500.0);
        state.touch_moved(FINGER, 200.0);

        assert_eq!(state.touch_finished(Finger(2)), Effect::None);
        assert_eq!(state.touch_finished(FINGER), Effect::Shown(MediaId(2)));
    }

    #[test]
    fn lost_finger_drops_gesture() {
        let mut state = gallery();
        open(&mut state, 1);

        state.touch_started(FINGER, 300.0);
        state.touch_moved(FINGER, 100.0);
        state.touch_lost(FINGER);

        assert_eq!(state.touch_finished(FINGER), Effect::None);
        assert_eq!(state.viewer().current(), Some(MediaId(1)));
    }

    #[test]
    fn swipe_while_closed_does_nothing() {
        let mut state = gallery();
        state.touch_started(FINGER, 300.0);
        state.touch_moved(FINGER, 100.0);
        assert_eq!(state.touch_finished(FINGER), Effect::None);
        assert!(!state.viewer().is_open());
    }

    #[test]
    fn current_item_follows_navigation() {
        let mut state = gallery();
        open(&mut state, 5);
        assert_eq!(state.handle(Message::NextRequested), Effect::Shown(MediaId(1)));
        assert_eq!(state.current_item().map(|item| item.id), Some(MediaId(1)));
        assert_eq!(
            state.handle(Message::PreviousRequested),
            Effect::Shown(MediaId(5))
        );
    }
}
