// SPDX-License-Identifier: MPL-2.0
//! Static page sections around the gallery.
//!
//! The page is a single vertical scroll: hero, gallery, about, contact and
//! footer, with a fixed header on top. Every section except the gallery has
//! a fixed height so scroll anchors can be computed without measuring.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;

use crate::ui::state::Section;

/// Address shown by the contact section.
pub const CONTACT_EMAIL: &str = "hello@gallery.com";

/// Messages emitted by the header and page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    ScrollTo(Section),
    CopyEmail,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(Section),
    CopyEmail(&'static str),
}

/// Process a page message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::ScrollTo(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::CopyEmail => Event::CopyEmail(CONTACT_EMAIL),
    }
}
