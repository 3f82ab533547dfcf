// SPDX-License-Identifier: MPL-2.0
//! Fixed-size frame showing a remote rendition.
//!
//! The frame never changes size while its content loads, so the grid and the
//! lightbox keep their layout between the loading, ready and failed states.

use crate::i18n::I18n;
use crate::media::LoadState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// How the rendition fills its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Crop to fill (grid tiles).
    Cover,
    /// Letterbox inside the frame (lightbox).
    Contain,
}

impl From<Fit> for ContentFit {
    fn from(fit: Fit) -> Self {
        match fit {
            Fit::Cover => ContentFit::Cover,
            Fit::Contain => ContentFit::Contain,
        }
    }
}

pub fn view<'a, Message: 'a>(
    state: Option<&LoadState>,
    width: f32,
    height: f32,
    fit: Fit,
    i18n: &I18n,
) -> Element<'a, Message> {
    match state {
        Some(LoadState::Ready(handle)) => Image::<image::Handle>::new(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(fit.into())
            .into(),
        Some(LoadState::Failed(err)) => placeholder(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(glyphs::icon(Glyph::ImageOff, sizing::ICON_XL).style(styles::overlay::glyph_text))
                .push(Text::new(i18n.tr(err.i18n_key())).size(typography::BODY_SM)),
            width,
            height,
        ),
        Some(LoadState::Loading) | None => placeholder(
            Text::new(i18n.tr("gallery-loading")).size(typography::BODY_SM),
            width,
            height,
        ),
    }
}

fn placeholder<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tile_placeholder)
        .into()
}
