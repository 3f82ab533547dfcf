// SPDX-License-Identifier: MPL-2.0
//! Remote media loading.
//!
//! Gallery renditions live behind HTTPS URLs. [`loader`] downloads and
//! decodes them off the UI thread and [`cache`] keeps the per-URL load state
//! with the decoded handles in a bounded LRU.

pub mod cache;
pub mod loader;

pub use cache::{LoadState, MediaCache};
pub use loader::{FetchLimits, Rendition};
