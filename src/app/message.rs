// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::media::RawImage;
use crate::error::Result;
use crate::ui::{gallery, page};
use iced::widget::scrollable::Viewport;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Page(page::Message),
    /// A rendition finished downloading and decoding.
    MediaLoaded(&'static str, Result<RawImage>),
    /// The page scrollable moved.
    PageScrolled(Viewport),
    WindowResized(Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `ru`).
    pub lang: Option<String>,
}
