// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes are always routed. Keyboard and touch input only reach the
//! gallery while the lightbox is open.

use super::Message;
use crate::ui::gallery;
use iced::{event, keyboard, window, Event, Subscription};

/// Creates the event subscription for the current viewer state.
pub fn create_event_subscription(viewer_open: bool) -> Subscription<Message> {
    let window_sub = event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    });

    if !viewer_open {
        return window_sub;
    }

    let viewer_sub = event::listen_with(|event, status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::Gallery(gallery::Message::KeyPressed(key))),
            event::Status::Captured => None,
        },
        // Touch is routed even when captured: the lightbox media is opaque
        // and swallows the press that starts a swipe.
        Event::Touch(touch) => Some(Message::Gallery(gallery::Message::Touch(touch))),
        _ => None,
    });

    Subscription::batch([window_sub, viewer_sub])
}
