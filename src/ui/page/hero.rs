// SPDX-License-Identifier: MPL-2.0
//! Hero block at the top of the page.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::state::Section;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Number of works in the catalog.
    pub work_count: usize,
}

fn stat<'a>(value: String, label: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(value)
                .size(typography::TITLE_LG)
                .color(palette::PRIMARY_500),
        )
        .push(Text::new(label).size(typography::BODY_SM))
        .into()
}

fn cta<'a>(glyph: Glyph, label: String, primary: bool) -> button::Button<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(glyphs::icon(glyph, sizing::ICON_MD).style(if primary {
            styles::overlay::glyph(palette::WHITE)
        } else {
            styles::overlay::glyph(palette::PRIMARY_500)
        }))
        .push(Text::new(label).size(typography::BODY_LG));

    button(
        Container::new(content)
            .height(Length::Fixed(sizing::CTA_HEIGHT))
            .padding([0.0, spacing::XL])
            .align_y(alignment::Vertical::Center),
    )
    .style(if primary {
        styles::button::primary
    } else {
        styles::button::secondary
    })
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let badge = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                glyphs::icon(Glyph::Sparkles, sizing::ICON_SM)
                    .style(styles::overlay::glyph(palette::PRIMARY_500)),
            )
            .push(Text::new(i18n.tr("hero-badge")).size(typography::BODY_SM)),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::badge(palette::PRIMARY_500));

    // Share has no destination yet and stays inert.
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            cta(Glyph::Play, i18n.tr("hero-view-gallery"), true)
                .on_press(Message::ScrollTo(Section::Gallery)),
        )
        .push(cta(Glyph::Share, i18n.tr("hero-share"), false));

    let count = ctx.work_count.to_string();
    let stats = Row::new()
        .spacing(spacing::XXL)
        .push(stat(
            i18n.tr_with_args("stat-works-value", &[("count", count.as_str())]),
            i18n.tr("stat-works"),
        ))
        .push(stat("4K".to_string(), i18n.tr("stat-quality")))
        .push(stat("100%".to_string(), i18n.tr("stat-uniqueness")));

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(badge)
        .push(
            Text::new(i18n.tr("hero-title"))
                .size(typography::DISPLAY)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Text::new(i18n.tr("hero-lede"))
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .push(actions)
        .push(stats);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding([sizing::HEADER_HEIGHT, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
