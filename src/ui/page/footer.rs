// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use super::header;
use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::Section;
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Copyright line for `year`.
pub fn copyright(i18n: &I18n, year: i32) -> String {
    let year = year.to_string();
    let brand = i18n.tr("brand-name");
    i18n.tr_with_args(
        "footer-copyright",
        &[("year", year.as_str()), ("brand", brand.as_str())],
    )
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let link = |key: &str| -> button::Button<'a, Message> {
        button(Text::new(i18n.tr(key)).size(typography::BODY_SM)).style(styles::button::link)
    };

    // Privacy and terms pages do not exist; only contacts scrolls.
    let links = Row::new()
        .spacing(spacing::LG)
        .push(link("footer-privacy"))
        .push(link("footer-terms"))
        .push(link("footer-contacts").on_press(Message::ScrollTo(Section::Contact)));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(header::brand(i18n, sizing::BRAND_MARK_SM, typography::TITLE_SM))
        .push(links)
        .push(Text::new(copyright(i18n, chrono::Local::now().year())).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FOOTER_HEIGHT))
        .padding([spacing::LG, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::footer)
        .into()
}
