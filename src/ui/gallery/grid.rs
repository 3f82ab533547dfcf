// SPDX-License-Identifier: MPL-2.0
//! Masonry grid of gallery tiles.
//!
//! Items flow into a responsive number of columns, each tile keeping the
//! aspect ratio of its display shape.

use super::component::Message;
use super::ViewContext;
use crate::domain::media::{MediaItem, MediaKind};
use crate::ui::components::media_frame::{self, Fit};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Column breakpoints (content width in px), narrowest first.
const BREAKPOINTS: [f32; 3] = [640.0, 1024.0, 1280.0];

/// Gap between tiles in both directions.
pub const GAP: f32 = spacing::LG;

/// Number of columns for a given content width (1 to 4).
#[must_use]
pub fn column_count(content_width: f32) -> usize {
    1 + BREAKPOINTS
        .iter()
        .filter(|breakpoint| content_width >= **breakpoint)
        .count()
}

/// Width of one tile when `columns` share `content_width`.
#[must_use]
pub fn tile_width(content_width: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    ((content_width - GAP * (columns - 1.0)) / columns).max(1.0)
}

pub fn view<'a>(ctx: &ViewContext<'a>, items: &[&'a MediaItem]) -> Element<'a, Message> {
    let columns = column_count(ctx.content_width);
    let width = tile_width(ctx.content_width, columns);

    let mut buckets: Vec<Vec<Element<'a, Message>>> =
        (0..columns).map(|_| Vec::new()).collect();
    for (index, item) in items.iter().enumerate() {
        buckets[index % columns].push(tile(ctx, item, width));
    }

    Row::with_children(buckets.into_iter().map(|bucket| {
        Column::with_children(bucket)
            .spacing(GAP)
            .width(Length::Fixed(width))
            .into()
    }))
    .spacing(GAP)
    .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, item: &'a MediaItem, width: f32) -> Element<'a, Message> {
    let height = item.shape.height_for_width(width);
    let frame = media_frame::view(
        ctx.media.state(item.thumbnail_url),
        width,
        height,
        Fit::Cover,
        ctx.i18n,
    );

    let mut layers = Stack::new().push(frame);
    if let Some(badge) = kind_badge(item.kind) {
        layers = layers.push(
            Container::new(badge)
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );
    }

    let kind_glyph = match item.kind {
        MediaKind::Photo => Glyph::Image,
        MediaKind::Video => Glyph::Video,
        MediaKind::AnimatedImage => Glyph::Sparkles,
    };
    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(item.title).size(typography::TITLE_SM))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(glyphs::icon(kind_glyph, sizing::ICON_SM).style(styles::overlay::glyph_text))
                .push(Text::new(ctx.i18n.tr(item.category.label_key())).size(typography::BODY_SM)),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(layers)
        .push(caption);

    button(content)
        .padding(0)
        .style(styles::button::tile)
        .on_press(Message::TileActivated(item.id))
        .into()
}

/// Round badge over the thumbnail: play for videos, sparkles for animations.
fn kind_badge<'a>(kind: MediaKind) -> Option<Element<'a, Message>> {
    let (glyph, size) = match kind {
        MediaKind::Photo => return None,
        MediaKind::Video => (Glyph::Play, sizing::ICON_XL),
        MediaKind::AnimatedImage => (Glyph::Sparkles, sizing::ICON_MD),
    };
    Some(
        Container::new(
            glyphs::icon(glyph, size).style(styles::overlay::glyph(iced::Color::WHITE)),
        )
        .padding(spacing::MD)
        .style(styles::overlay::indicator)
        .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_follows_breakpoints() {
        assert_eq!(column_count(320.0), 1);
        assert_eq!(column_count(639.0), 1);
        assert_eq!(column_count(640.0), 2);
        assert_eq!(column_count(1024.0), 3);
        assert_eq!(column_count(1200.0), 3);
        assert_eq!(column_count(1280.0), 4);
        assert_eq!(column_count(4000.0), 4);
    }

    #[test]
    fn tile_width_accounts_for_gaps() {
        assert_eq!(tile_width(300.0, 1), 300.0);
        assert_eq!(tile_width(648.0, 2), 312.0);
    }

    #[test]
    fn tile_width_never_collapses() {
        assert_eq!(tile_width(0.0, 4), 1.0);
        assert_eq!(tile_width(100.0, 0), 100.0);
    }
}
