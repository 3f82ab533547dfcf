// SPDX-License-Identifier: MPL-2.0
//! Per-URL load state with an LRU bound on decoded renditions.
//!
//! # Example
//!
//! ```ignore
//! let mut cache = MediaCache::new(24);
//! if cache.request(url) {
//!     // spawn loader::load(url, ..)
//! }
//! // later, when the task completes:
//! cache.complete(url, result);
//! ```

use crate::domain::media::RawImage;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Where a rendition stands.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// A load task is in flight.
    Loading,
    /// Decoded and ready to render.
    Ready(Handle),
    /// The load failed; the tile shows a placeholder.
    Failed(Error),
}

impl LoadState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Bounded cache keyed by rendition URL.
pub struct MediaCache {
    entries: LruCache<&'static str, LoadState>,
}

impl MediaCache {
    /// Creates a cache holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as wanted.
    ///
    /// Returns `true` when the caller should start a load: the URL is unknown
    /// or was evicted. Known entries are only promoted in the LRU order.
    pub fn request(&mut self, url: &'static str) -> bool {
        if self.entries.get(url).is_some() {
            return false;
        }
        self.entries.put(url, LoadState::Loading);
        true
    }

    /// Records the outcome of a load for `url`.
    pub fn complete(&mut self, url: &'static str, result: Result<RawImage>) {
        let state = match result {
            Ok(image) => {
                let (width, height) = (image.width(), image.height());
                LoadState::Ready(Handle::from_rgba(width, height, image.into_rgba_bytes()))
            }
            Err(err) => LoadState::Failed(err),
        };
        if let Some((evicted, _)) = self.entries.push(url, state) {
            if evicted != url {
                log::trace!("evicted {evicted} from media cache");
            }
        }
    }

    /// Current state of `url` without touching the LRU order.
    #[must_use]
    pub fn state(&self, url: &str) -> Option<&LoadState> {
        self.entries.peek(url)
    }

    /// Forgets a failed entry so the next [`request`](Self::request) retries it.
    pub fn forget_failed(&mut self, url: &str) {
        if matches!(self.entries.peek(url), Some(LoadState::Failed(_))) {
            self.entries.pop(url);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for MediaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    const A: &str = "https://example.test/a.jpg";
    const B: &str = "https://example.test/b.jpg";
    const C: &str = "https://example.test/c.jpg";

    fn image() -> RawImage {
        RawImage::from_rgba(2, 2, vec![255; 16])
    }

    #[test]
    fn first_request_starts_load() {
        let mut cache = MediaCache::new(4);
        assert!(cache.is_empty());
        assert!(cache.request(A));
        assert!(matches!(cache.state(A), Some(LoadState::Loading)));
        assert!(!cache.request(A));
    }

    #[test]
    fn completion_makes_entry_ready() {
        let mut cache = MediaCache::new(4);
        cache.request(A);
        cache.complete(A, Ok(image()));
        assert!(cache.state(A).is_some_and(LoadState::is_ready));
        assert!(!cache.request(A));
    }

    #[test]
    fn failure_is_remembered_until_forgotten() {
        let mut cache = MediaCache::new(4);
        cache.request(A);
        cache.complete(A, Err(FetchError::Status(404).into()));
        assert!(matches!(cache.state(A), Some(LoadState::Failed(_))));
        assert!(!cache.request(A));

        cache.forget_failed(A);
        assert!(cache.state(A).is_none());
        assert!(cache.request(A));
    }

    #[test]
    fn least_recently_requested_is_evicted() {
        let mut cache = MediaCache::new(2);
        cache.request(A);
        cache.request(B);
        cache.request(A); // promote A
        cache.request(C);

        assert_eq!(cache.len(), 2);
        assert!(cache.state(B).is_none());
        assert!(cache.state(A).is_some());
        assert!(cache.state(C).is_some());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache = MediaCache::new(0);
        cache.request(A);
        cache.request(B);
        assert_eq!(cache.len(), 1);
    }
}
