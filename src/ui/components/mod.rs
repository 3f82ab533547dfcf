// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`media_frame`] - A remote rendition in a fixed frame, with loading and
//!   failure placeholders

pub mod media_frame;
