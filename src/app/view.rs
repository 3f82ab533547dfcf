// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a vertical scrollable with the header stacked on top. The
//! lightbox, when open, covers the whole window above both.

use super::{Message, PAGE_SCROLL_ID};
use crate::i18n::I18n;
use crate::media::MediaCache;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::gallery;
use crate::ui::page::{self, about, contact, footer, header, hero};
use crate::ui::state::PageScroll;
use crate::ui::styles;
use crate::ui::viewer::lightbox;
use iced::widget::{scrollable, Column, Container, Id, Stack};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub media: &'a MediaCache,
    pub page: &'a PageScroll,
    pub window: Size,
    pub menu_open: bool,
}

/// Width available to page content for a window of `window_width`.
#[must_use]
pub fn content_width(window_width: f32) -> f32 {
    (window_width - spacing::LG * 2.0).clamp(1.0, sizing::CONTENT_MAX_WIDTH)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let compact = ctx.window.width < header::COMPACT_WIDTH;

    let sections = Column::new()
        .width(Length::Fill)
        .push(
            hero::view(hero::ViewContext {
                i18n: ctx.i18n,
                work_count: ctx.gallery.catalog().len(),
            })
            .map(Message::Page),
        )
        .push(
            gallery::view(
                gallery::ViewContext {
                    i18n: ctx.i18n,
                    media: ctx.media,
                    content_width: content_width(ctx.window.width),
                },
                ctx.gallery,
            )
            .map(Message::Gallery),
        )
        .push(
            about::view(about::ViewContext {
                i18n: ctx.i18n,
                media: ctx.media,
                compact,
            })
            .map(Message::Page),
        )
        .push(contact::view(ctx.i18n).map(Message::Page))
        .push(footer::view(ctx.i18n).map(Message::Page));

    let page_scroll = scrollable(sections)
        .id(Id::new(PAGE_SCROLL_ID))
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        scrolled: ctx.page.is_scrolled(),
        menu_open: ctx.menu_open,
        window_width: ctx.window.width,
    })
    .map(Message::Page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page_scroll)
        .push(Column::new().push(header));

    let viewer = ctx
        .gallery
        .current_item()
        .zip(ctx.gallery.navigation_info());
    if let Some((item, info)) = viewer {
        layers = layers.push(
            lightbox::view(
                lightbox::ViewContext {
                    i18n: ctx.i18n,
                    media: ctx.media,
                    window: ctx.window,
                },
                item,
                info,
            )
            .map(Message::Gallery),
        );
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
