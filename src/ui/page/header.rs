// SPDX-License-Identifier: MPL-2.0
//! Fixed page header with the brand and section anchors.
//!
//! Transparent at the top of the page, opaque once the page has scrolled.
//! On narrow windows the anchors collapse behind a menu button.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::glyphs::{self, Glyph};
use crate::ui::state::Section;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Padding};

/// Window width below which the anchors move into the menu.
pub const COMPACT_WIDTH: f32 = 768.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scrolled: bool,
    pub menu_open: bool,
    pub window_width: f32,
}

/// Brand mark followed by the brand name.
pub fn brand<'a, M: 'a>(i18n: &I18n, mark_size: f32, text_size: f32) -> Element<'a, M> {
    let mark = Container::new(
        glyphs::icon(Glyph::Aperture, mark_size * 0.6)
            .style(styles::overlay::glyph(palette::WHITE)),
    )
    .width(Length::Fixed(mark_size))
    .height(Length::Fixed(mark_size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::brand_mark);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(mark)
        .push(Text::new(i18n.tr("brand-name")).size(text_size))
        .into()
}

fn anchors<'a>(i18n: &I18n) -> [Element<'a, Message>; 3] {
    [
        (Section::Gallery, "nav-gallery"),
        (Section::About, "nav-about"),
        (Section::Contact, "nav-contact"),
    ]
    .map(|(section, key)| {
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .style(styles::button::link)
            .on_press(Message::ScrollTo(section))
            .into()
    })
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let compact = ctx.window_width < COMPACT_WIDTH;

    let mut bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(brand(ctx.i18n, sizing::BRAND_MARK, typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    if compact {
        bar = bar.push(
            button(glyphs::icon(Glyph::Menu, sizing::ICON_LG).style(styles::overlay::glyph_text))
                .style(styles::button::link)
                .on_press(Message::ToggleMenu),
        );
    } else {
        bar = bar.push(
            Row::with_children(anchors(ctx.i18n))
                .spacing(spacing::XL)
                .align_y(alignment::Vertical::Center),
        );
    }

    let mut content = Column::new().push(
        Container::new(bar)
            .height(Length::Fixed(sizing::HEADER_HEIGHT))
            .align_y(alignment::Vertical::Center),
    );

    if compact && ctx.menu_open {
        content = content.push(
            Column::with_children(anchors(ctx.i18n))
                .spacing(spacing::XS)
                .padding(Padding::ZERO.bottom(spacing::MD)),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding([0.0, spacing::LG])
        .style(styles::container::header(ctx.scrolled || ctx.menu_open))
        .into()
}
