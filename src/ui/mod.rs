// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Component modules follow the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`page`] - Header, hero, about, contact and footer sections
//! - [`gallery`] - Category bar and tile grid, owner of the viewer state
//! - [`viewer`] - Viewer state machine and the lightbox overlay
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Swipe tracking and page scroll state
//! - [`components`] - Reusable UI components (media frame)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`glyphs`] - Named SVG glyph registry

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod glyphs;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
