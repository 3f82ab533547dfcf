// SPDX-License-Identifier: MPL-2.0
//! About section: pitch, feature cards and an animated visual.

use super::Message;
use crate::domain::media::catalog::ANIMATION_5;
use crate::i18n::I18n;
use crate::media::MediaCache;
use crate::ui::components::media_frame::{self, Fit};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding};

/// Size of the visual next to the text.
const VISUAL_WIDTH: f32 = 480.0;
const VISUAL_HEIGHT: f32 = 360.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub media: &'a MediaCache,
    /// Narrow windows stack the visual under the text.
    pub compact: bool,
}

fn feature<'a>(glyph: Glyph, accent: Color, title: String, body: String) -> Element<'a, Message> {
    let tile = Container::new(glyphs::icon(glyph, sizing::ICON_LG).style(styles::overlay::glyph(accent)))
        .width(Length::Fixed(sizing::TOUCH_TARGET))
        .height(Length::Fixed(sizing::TOUCH_TARGET))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::icon_tile(accent));

    Row::new()
        .spacing(spacing::MD)
        .push(tile)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(title).size(typography::TITLE_SM))
                .push(Text::new(body).size(typography::BODY_SM)),
        )
        .into()
}

fn visual<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let frame = media_frame::view(
        ctx.media.state(ANIMATION_5),
        VISUAL_WIDTH,
        VISUAL_HEIGHT,
        Fit::Cover,
        ctx.i18n,
    );

    let floating = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                glyphs::icon(Glyph::CheckCircle, sizing::ICON_LG)
                    .style(styles::overlay::glyph(palette::SUCCESS_400)),
            )
            .push(
                Column::new()
                    .push(Text::new(ctx.i18n.tr("about-card-title")).size(typography::BODY))
                    .push(Text::new(ctx.i18n.tr("about-card-body")).size(typography::CAPTION)),
            ),
    )
    .padding(spacing::MD)
    .style(styles::container::card);

    Stack::new()
        .push(frame)
        .push(
            Container::new(floating)
                .width(Length::Fixed(VISUAL_WIDTH))
                .height(Length::Fixed(VISUAL_HEIGHT))
                .padding(Padding::ZERO.left(spacing::MD).bottom(spacing::MD))
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Bottom),
        )
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let badge = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                glyphs::icon(Glyph::Info, sizing::ICON_SM)
                    .style(styles::overlay::glyph(palette::ACCENT_500)),
            )
            .push(Text::new(i18n.tr("about-badge")).size(typography::BODY_SM)),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::badge(palette::ACCENT_500));

    let text = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(badge)
        .push(Text::new(i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("about-body")).size(typography::BODY))
        .push(feature(
            Glyph::Zap,
            palette::PRIMARY_500,
            i18n.tr("about-fast-title"),
            i18n.tr("about-fast-body"),
        ))
        .push(feature(
            Glyph::Smartphone,
            palette::ACCENT_500,
            i18n.tr("about-responsive-title"),
            i18n.tr("about-responsive-body"),
        ));

    let content: Element<'a, Message> = if ctx.compact {
        text.into()
    } else {
        Container::new(
            Row::new()
                .spacing(spacing::XXL)
                .align_y(alignment::Vertical::Center)
                .push(text)
                .push(visual(&ctx)),
        )
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ABOUT_HEIGHT))
        .padding([spacing::XXL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::band)
        .into()
}
