// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are handled by their components; the handlers here
//! turn the resulting effects and events into tasks: media loads, scroll
//! operations and clipboard writes.

use super::{Message, PAGE_SCROLL_ID};
use crate::application::query::navigation;
use crate::domain::media::{MediaId, MediaItem, RawImage};
use crate::error::Result;
use crate::media::loader::{self, FetchLimits, Rendition};
use crate::media::MediaCache;
use crate::ui::gallery;
use crate::ui::page::{self, Event as PageEvent};
use crate::ui::state::PageScroll;
use crate::ui::viewer::Effect;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{Size, Task};

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub media: &'a mut MediaCache,
    pub page: &'a mut PageScroll,
    pub limits: FetchLimits,
    pub window: &'a mut Size,
    pub menu_open: &'a mut bool,
}

/// Starts loading `url` unless it is already cached or in flight.
pub fn request_media(
    media: &mut MediaCache,
    url: &'static str,
    rendition: Rendition,
    limits: FetchLimits,
) -> Task<Message> {
    if !media.request(url) {
        return Task::none();
    }
    log::debug!("loading {rendition:?} {url}");
    Task::perform(loader::load(url, rendition, limits), |(url, result)| {
        Message::MediaLoaded(url, result)
    })
}

fn viewer_rendition(item: &MediaItem) -> Rendition {
    if item.is_video() {
        Rendition::Thumbnail
    } else {
        Rendition::Full
    }
}

/// Loads the rendition shown for `id` and prefetches its neighbours.
fn load_viewer_media(ctx: &mut UpdateContext<'_>, id: MediaId) -> Task<Message> {
    let view = ctx.gallery.filtered_view();
    let mut wanted: Vec<(&'static str, Rendition)> = Vec::with_capacity(3);
    if let Some(item) = ctx.gallery.catalog().get(id) {
        wanted.push((item.viewer_url(), viewer_rendition(item)));
    }
    for neighbour in [navigation::next(&view, id), navigation::previous(&view, id)]
        .into_iter()
        .flatten()
    {
        wanted.push((neighbour.viewer_url(), viewer_rendition(neighbour)));
    }

    let Some(&(current, _)) = wanted.first() else {
        return Task::none();
    };
    // A failed rendition gets another attempt each time it is shown.
    ctx.media.forget_failed(current);

    let limits = ctx.limits;
    Task::batch(
        wanted
            .into_iter()
            .map(|(url, rendition)| request_media(ctx.media, url, rendition, limits)),
    )
}

fn snap_page(page: &PageScroll, offset_y: f32) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLL_ID),
        RelativeOffset {
            x: 0.0,
            y: page.relative(offset_y),
        },
    )
}

/// Applies the outcome of a viewer transition.
pub fn apply_viewer_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Opened(id) => {
            ctx.page.lock();
            *ctx.menu_open = false;
            load_viewer_media(ctx, id)
        }
        Effect::Shown(id) => load_viewer_media(ctx, id),
        Effect::Closed => match ctx.page.unlock() {
            Some(offset) => snap_page(ctx.page, offset),
            None => Task::none(),
        },
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effect = ctx.gallery.handle(message);
    apply_viewer_effect(ctx, effect)
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match page::update(message, ctx.menu_open) {
        PageEvent::None => Task::none(),
        PageEvent::ScrollTo(section) => {
            if ctx.page.is_locked() {
                return Task::none();
            }
            snap_page(ctx.page, ctx.page.section_offset(section))
        }
        PageEvent::CopyEmail(address) => {
            log::info!("copied contact address to the clipboard");
            iced::clipboard::write(address.to_string())
        }
    }
}

pub fn handle_media_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &'static str,
    result: Result<RawImage>,
) -> Task<Message> {
    ctx.media.complete(url, result);
    Task::none()
}

/// Records the page viewport; snaps back while the viewer holds the lock.
pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    let offset_y = viewport.absolute_offset().y;
    let content_height = viewport.content_bounds().height;
    let viewport_height = viewport.bounds().height;

    match ctx.page.update(offset_y, content_height, viewport_height) {
        Some(frozen) => snap_page(ctx.page, frozen),
        None => Task::none(),
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window = size;
    Task::none()
}
