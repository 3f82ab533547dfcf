// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std` and `log`) to
//! ensure testability.
//!
//! # Modules
//!
//! - [`media`]: Catalog, categories and filtering
//!   ([`MediaItem`](media::MediaItem), [`Category`](media::Category),
//!   [`Catalog`](media::Catalog), [`FilterState`](media::FilterState))

pub mod media;
