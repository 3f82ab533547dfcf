// SPDX-License-Identifier: MPL-2.0
//! Page scroll state management
//!
//! Tracks the vertical offset of the single-page layout, whether the header
//! should switch to its scrolled look, where each section anchor sits, and
//! the scroll lock held while the viewer overlay is open.

use crate::ui::design_tokens::sizing;

/// Offset (exclusive) past which the header switches to its opaque style.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// Page sections reachable from the header and hero anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    Gallery,
    About,
    Contact,
}

/// Scroll state of the page scrollable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageScroll {
    /// Current vertical offset.
    pub offset_y: f32,

    /// Height of the scrolled content.
    pub content_height: f32,

    /// Height of the visible viewport.
    pub viewport_height: f32,

    /// Offset frozen while the viewer is open.
    locked_at: Option<f32>,
}

impl PageScroll {
    /// Records a viewport change reported by the scrollable.
    ///
    /// While locked, the offset is not updated and the frozen offset is
    /// returned so the caller can snap the page back to it.
    pub fn update(&mut self, offset_y: f32, content_height: f32, viewport_height: f32) -> Option<f32> {
        self.content_height = content_height;
        self.viewport_height = viewport_height;

        match self.locked_at {
            Some(frozen) if (frozen - offset_y).abs() > f32::EPSILON => Some(frozen),
            Some(_) => None,
            None => {
                self.offset_y = offset_y;
                None
            }
        }
    }

    /// Freezes the page at its current offset.
    pub fn lock(&mut self) {
        self.locked_at = Some(self.offset_y);
    }

    /// Releases the lock and returns the offset the page was frozen at.
    pub fn unlock(&mut self) -> Option<f32> {
        self.locked_at.take()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked_at.is_some()
    }

    /// Whether the header should render its scrolled (opaque) style.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.offset_y > SCROLLED_THRESHOLD
    }

    /// Largest offset the scrollable accepts.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Offset that brings `section` to the top of the viewport.
    ///
    /// The hero, about, contact and footer blocks have fixed heights, so the
    /// anchors after the variable-height gallery are measured from the end.
    #[must_use]
    pub fn section_offset(&self, section: Section) -> f32 {
        let raw = match section {
            Section::Top => 0.0,
            Section::Gallery => sizing::HERO_HEIGHT,
            Section::About => {
                self.content_height
                    - (sizing::ABOUT_HEIGHT + sizing::CONTACT_HEIGHT + sizing::FOOTER_HEIGHT)
            }
            Section::Contact => {
                self.content_height - (sizing::CONTACT_HEIGHT + sizing::FOOTER_HEIGHT)
            }
        };
        raw.clamp(0.0, self.max_offset())
    }

    /// Converts an absolute offset to the `0.0..=1.0` fraction used by
    /// relative scroll operations.
    #[must_use]
    pub fn relative(&self, offset_y: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            (offset_y / max).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageScroll {
        let mut page = PageScroll::default();
        page.update(0.0, 4000.0, 800.0);
        page
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        let mut page = page();
        page.update(50.0, 4000.0, 800.0);
        assert!(!page.is_scrolled());
        page.update(51.0, 4000.0, 800.0);
        assert!(page.is_scrolled());
    }

    #[test]
    fn lock_freezes_offset() {
        let mut page = page();
        page.update(300.0, 4000.0, 800.0);
        page.lock();

        assert_eq!(page.update(900.0, 4000.0, 800.0), Some(300.0));
        assert_eq!(page.offset_y, 300.0);
        assert_eq!(page.update(300.0, 4000.0, 800.0), None);

        assert_eq!(page.unlock(), Some(300.0));
        assert!(!page.is_locked());
        assert_eq!(page.update(900.0, 4000.0, 800.0), None);
        assert_eq!(page.offset_y, 900.0);
    }

    #[test]
    fn unlock_without_lock_is_none() {
        let mut page = page();
        assert_eq!(page.unlock(), None);
    }

    #[test]
    fn section_offsets_are_ordered_and_clamped() {
        let page = page();
        let top = page.section_offset(Section::Top);
        let gallery = page.section_offset(Section::Gallery);
        let about = page.section_offset(Section::About);
        let contact = page.section_offset(Section::Contact);

        assert_eq!(top, 0.0);
        assert_eq!(gallery, sizing::HERO_HEIGHT);
        assert!(about > gallery);
        assert!(contact >= about);
        assert!(contact <= page.max_offset());
    }

    #[test]
    fn relative_offset_is_fraction_of_range() {
        let page = page();
        assert_eq!(page.relative(0.0), 0.0);
        assert_eq!(page.relative(1600.0), 0.5);
        assert_eq!(page.relative(9000.0), 1.0);
        assert_eq!(PageScroll::default().relative(100.0), 0.0);
    }

    #[test]
    fn short_page_clamps_to_zero() {
        let mut page = PageScroll::default();
        page.update(0.0, 300.0, 800.0);
        assert_eq!(page.section_offset(Section::Contact), 0.0);
    }
}
