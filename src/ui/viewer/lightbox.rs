// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox overlay.
//!
//! Layers, bottom to top: a backdrop that closes on click, the centered
//! media with its caption, the close button, the navigation arrows and the
//! position counter. The media frame is opaque so clicks on it do not reach
//! the backdrop.

use crate::application::query::NavigationInfo;
use crate::domain::media::MediaItem;
use crate::i18n::I18n;
use crate::media::MediaCache;
use crate::ui::components::media_frame::{self, Fit};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::Message;
use crate::ui::glyphs::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub media: &'a MediaCache,
    pub window: Size,
}

/// Largest frame that fits the window while leaving room for the controls.
#[must_use]
pub fn frame_size(window: Size) -> Size {
    let reserved = sizing::TOUCH_TARGET * 2.0 + spacing::XXL * 2.0;
    Size::new(
        (window.width - reserved).clamp(1.0, sizing::LIGHTBOX_MAX_WIDTH),
        (window.height * 0.75).clamp(1.0, sizing::LIGHTBOX_MAX_HEIGHT),
    )
}

pub fn view<'a>(
    ctx: ViewContext<'a>,
    item: &'a MediaItem,
    info: NavigationInfo,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseRequested);

    let frame = frame_size(ctx.window);
    let media = opaque(media_frame::view(
        ctx.media.state(item.viewer_url()),
        frame.width,
        frame.height,
        Fit::Contain,
        ctx.i18n,
    ));

    let caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(item.title).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr(item.kind.label_key()))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let swipe_hint = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(hint_glyph(Glyph::MoveLeft))
        .push(
            Text::new(ctx.i18n.tr("viewer-swipe-hint"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_500),
        )
        .push(hint_glyph(Glyph::MoveRight));

    let content = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(media)
            .push(caption)
            .push(swipe_hint),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let close = Container::new(round_button(Glyph::Close, sizing::ICON_LG, Message::CloseRequested))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::MD);

    let arrows = Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(round_button(
                Glyph::ChevronLeft,
                sizing::ICON_XL,
                Message::PreviousRequested,
            ))
            .push(Space::new().width(Length::Fill))
            .push(round_button(
                Glyph::ChevronRight,
                sizing::ICON_XL,
                Message::NextRequested,
            )),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding(spacing::MD);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content)
        .push(close);

    if info.can_navigate() {
        layers = layers.push(arrows);
    }

    if let Some(label) = position_label(ctx.i18n, info) {
        layers = layers.push(
            Container::new(
                Container::new(Text::new(label).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::overlay::indicator),
            )
            .padding(spacing::MD),
        );
    }

    opaque(layers)
}

/// Counter text for the current item. Absent when there is nothing to step to.
fn position_label(i18n: &I18n, info: NavigationInfo) -> Option<String> {
    if !info.can_navigate() {
        return None;
    }
    let index = info.current_index?;
    let current = (index + 1).to_string();
    let total = info.total_count.to_string();
    Some(i18n.tr_with_args(
        "viewer-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
}

fn round_button<'a>(glyph: Glyph, size: f32, on_press: Message) -> Element<'a, Message> {
    button(glyphs::icon(glyph, size).style(styles::overlay::glyph(palette::WHITE)))
        .padding(spacing::SM)
        .style(styles::button::overlay)
        .on_press(on_press)
        .into()
}

fn hint_glyph<'a>(glyph: Glyph) -> Element<'a, Message> {
    glyphs::icon(glyph, sizing::ICON_SM)
        .style(styles::overlay::glyph(palette::GRAY_500))
        .into()
}
