// SPDX-License-Identifier: MPL-2.0
//! Contact section with the email call to action and social links.

use super::{Message, CONTACT_EMAIL};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

const SOCIAL: [Glyph; 4] = [Glyph::Instagram, Glyph::Twitter, Glyph::Facebook, Glyph::Youtube];

fn action<'a>(glyph: Glyph, label: String, primary: bool) -> button::Button<'a, Message> {
    let color = if primary {
        palette::WHITE
    } else {
        palette::PRIMARY_500
    };
    button(
        Container::new(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(glyphs::icon(glyph, sizing::ICON_MD).style(styles::overlay::glyph(color)))
                .push(Text::new(label).size(typography::BODY_LG)),
        )
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

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    // Download and the social buttons have no targets and stay inert.
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(action(Glyph::Mail, i18n.tr("contact-write"), true).on_press(Message::CopyEmail))
        .push(action(Glyph::Download, i18n.tr("contact-download"), false));

    let social = Row::with_children(SOCIAL.into_iter().map(|glyph| {
        button(
            Container::new(glyphs::icon(glyph, sizing::ICON_MD).style(styles::overlay::glyph_text))
                .width(Length::Fixed(sizing::TOUCH_TARGET))
                .height(Length::Fixed(sizing::TOUCH_TARGET))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .style(styles::button::social)
        .into()
    }))
    .spacing(spacing::MD);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("contact-body"))
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Text::new(CONTACT_EMAIL)
                .size(typography::TITLE_SM)
                .color(palette::PRIMARY_500),
        )
        .push(actions)
        .push(social);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTACT_HEIGHT))
        .padding([spacing::XXL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
