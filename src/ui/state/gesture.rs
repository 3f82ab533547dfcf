// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state
//!
//! Classifies a horizontal touch gesture into a single navigation step.
//! Only the x axis is tracked; there is no velocity or multi-touch handling.
//!
//! Sign convention: `distance = start - end`. A finger moving left (positive
//! distance) advances to the next item, a finger moving right retreats.

use crate::config::DEFAULT_SWIPE_THRESHOLD;

/// Navigation step produced by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger travelled left past the threshold.
    Advance,
    /// Finger travelled right past the threshold.
    Retreat,
}

/// Tracks one horizontal gesture at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeGesture {
    /// Minimum travel (exclusive) before a gesture counts as a swipe.
    threshold: f32,

    /// X position where the current gesture started.
    pub start_x: Option<f32>,

    /// Last X position reported while moving.
    pub end_x: Option<f32>,
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeGesture {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
            end_x: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Starts a new gesture, forgetting where the previous one ended.
    pub fn start(&mut self, x: f32) {
        self.end_x = None;
        self.start_x = Some(x);
    }

    /// Records the latest position of the moving finger.
    pub fn moved(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Ends the gesture and classifies it.
    ///
    /// Returns `None` for taps (no move recorded) and for travel within the
    /// threshold in either direction.
    #[must_use]
    pub fn finish(&self) -> Option<Swipe> {
        let start = self.start_x?;
        let end = self.end_x?;
        classify(start - end, self.threshold)
    }

    /// Drops the gesture without classifying it (finger lost).
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

/// Maps a signed travel distance onto a swipe. The threshold is exclusive.
#[must_use]
pub fn classify(distance: f32, threshold: f32) -> Option<Swipe> {
    if distance > threshold {
        Some(Swipe::Advance)
    } else if distance < -threshold {
        Some(Swipe::Retreat)
    } else {
        None
    }
}
