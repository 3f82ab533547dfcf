// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when the active category has no items.

use super::component::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            glyphs::icon(Glyph::ImageOff, sizing::ICON_XXL)
                .style(styles::overlay::glyph(palette::GRAY_600)),
        )
        .push(
            Text::new(i18n.tr("gallery-empty"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXXL, 0.0])
        .align_x(alignment::Horizontal::Center)
        .into()
}
