// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the catalog, its item types and category filtering,
//! all independent of any presentation or infrastructure concerns.

pub mod catalog;
pub mod filter;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use filter::FilterState;
pub use types::{Category, DisplayShape, MediaId, MediaItem, MediaKind, RawImage};
