// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Viewer**: Swipe gesture threshold
//! - **Media**: Download timeout, size limit and decoded-image cache

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Horizontal travel (exclusive) a touch gesture needs to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Default timeout for a single media download (in seconds).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u32 = 20;

/// Minimum download timeout (in seconds).
pub const MIN_FETCH_TIMEOUT_SECS: u32 = 2;

/// Maximum download timeout (in seconds).
pub const MAX_FETCH_TIMEOUT_SECS: u32 = 120;

/// Default cap on a single downloaded rendition, in megabytes.
pub const DEFAULT_MAX_DOWNLOAD_MB: u32 = 64;

/// Minimum download cap in megabytes.
pub const MIN_MAX_DOWNLOAD_MB: u32 = 1;

/// Maximum download cap in megabytes.
pub const MAX_MAX_DOWNLOAD_MB: u32 = 512;

/// Default number of decoded renditions kept in memory.
pub const DEFAULT_CACHE_ENTRIES: u32 = 24;

/// Minimum decoded-image cache size.
pub const MIN_CACHE_ENTRIES: u32 = 4;

/// Maximum decoded-image cache size.
pub const MAX_CACHE_ENTRIES: u32 = 256;

/// Longest edge of a decoded thumbnail, in pixels.
pub const THUMBNAIL_MAX_EDGE: u32 = 640;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(MAX_SWIPE_THRESHOLD > MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    assert!(MIN_FETCH_TIMEOUT_SECS > 0);
    assert!(MAX_FETCH_TIMEOUT_SECS >= MIN_FETCH_TIMEOUT_SECS);
    assert!(DEFAULT_FETCH_TIMEOUT_SECS >= MIN_FETCH_TIMEOUT_SECS);
    assert!(DEFAULT_FETCH_TIMEOUT_SECS <= MAX_FETCH_TIMEOUT_SECS);

    assert!(MIN_MAX_DOWNLOAD_MB > 0);
    assert!(MAX_MAX_DOWNLOAD_MB >= MIN_MAX_DOWNLOAD_MB);
    assert!(DEFAULT_MAX_DOWNLOAD_MB >= MIN_MAX_DOWNLOAD_MB);
    assert!(DEFAULT_MAX_DOWNLOAD_MB <= MAX_MAX_DOWNLOAD_MB);

    assert!(MIN_CACHE_ENTRIES > 0);
    assert!(MAX_CACHE_ENTRIES >= MIN_CACHE_ENTRIES);
    assert!(DEFAULT_CACHE_ENTRIES >= MIN_CACHE_ENTRIES);
    assert!(DEFAULT_CACHE_ENTRIES <= MAX_CACHE_ENTRIES);

    assert!(THUMBNAIL_MAX_EDGE > 0);
};
