// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Input tracking and scroll bookkeeping kept apart from the widgets that
//! render them.

pub mod gesture;
pub mod page_scroll;

pub use gesture::{Swipe, SwipeGesture};
pub use page_scroll::{PageScroll, Section, SCROLLED_THRESHOLD};
