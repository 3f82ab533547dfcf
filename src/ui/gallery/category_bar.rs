// SPDX-License-Identifier: MPL-2.0
//! Category chips above the grid.

use super::component::Message;
use crate::domain::media::Category;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element, Length};

/// Glyph shown on the chip of `category`.
#[must_use]
pub fn glyph_for(category: Category) -> Glyph {
    match category {
        Category::All => Glyph::Grid,
        Category::Portfolio => Glyph::Image,
        Category::Video => Glyph::Video,
        Category::Nature => Glyph::Mountain,
    }
}

pub fn view<'a>(i18n: &I18n, active: Category) -> Element<'a, Message> {
    let chips = Category::ALL.into_iter().map(|category| {
        let is_active = category == active;
        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                glyphs::icon(glyph_for(category), sizing::ICON_SM)
                    .style(styles::overlay::glyph_text),
            )
            .push(Text::new(i18n.tr(category.label_key())).size(typography::BODY));

        button(content)
            .height(Length::Fixed(sizing::TOUCH_TARGET))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::category_chip(is_active))
            .on_press(Message::CategorySelected(category))
            .into()
    });

    Row::with_children(chips)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_glyph() {
        let glyphs: Vec<Glyph> = Category::ALL.iter().map(|c| glyph_for(*c)).collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
