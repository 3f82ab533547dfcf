// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a single-page media gallery built with the Iced GUI framework.
//!
//! It shows a fixed catalog of photos, videos and animations in a category
//! filtered grid, with a lightbox that supports keyboard and swipe navigation.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
