// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading and navigating domain data.
//! These services do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`navigation`]: Wrap-around navigation inside a filtered view

pub mod navigation;

// Re-export main types
pub use navigation::{Direction, NavigationInfo};
