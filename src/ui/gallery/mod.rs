// SPDX-License-Identifier: MPL-2.0
//! Gallery section: heading, category bar and the tile grid.

pub mod category_bar;
pub mod component;
pub mod empty_state;
pub mod grid;

pub use component::{Message, State};

use crate::i18n::I18n;
use crate::media::MediaCache;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Everything the gallery views need besides the component state.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub media: &'a MediaCache,
    /// Width available to the grid, in pixels.
    pub content_width: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("gallery-lede")).size(typography::BODY));

    let items = state.filtered_view();
    let body = if items.is_empty() {
        empty_state::view(ctx.i18n)
    } else {
        grid::view(&ctx, &items)
    };

    let content = Column::new()
        .spacing(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(category_bar::view(ctx.i18n, state.category()))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXXL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .into()
}
