// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the gallery
//! and the media cache.
//!
//! The `App` struct wires together the domains (gallery, localization,
//! media loading) and translates messages into side effects like downloads
//! or scroll operations.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::content_width;

use crate::config;
use crate::domain::media::catalog::ANIMATION_5;
use crate::domain::media::Catalog;
use crate::i18n::I18n;
use crate::media::{FetchLimits, MediaCache, Rendition};
use crate::ui::gallery;
use crate::ui::state::PageScroll;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Identifier of the page scrollable, target of scroll operations.
pub const PAGE_SCROLL_ID: &str = "page-scrollable";

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    media: MediaCache,
    page: PageScroll,
    limits: FetchLimits,
    theme: Theme,
    window: Size,
    /// Whether the compact header menu is open.
    menu_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("category", &self.gallery.category())
            .field("viewer", &self.gallery.viewer())
            .field("media", &self.media)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts loading every thumbnail.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let mut app = App {
            gallery: gallery::State::new(Catalog::builtin().clone(), config.swipe_threshold()),
            media: MediaCache::new(config.cache_entries()),
            page: PageScroll::default(),
            limits: FetchLimits::from_config(&config),
            theme: config.general.theme_mode.theme(),
            window: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            menu_open: false,
            i18n,
        };

        let urls: Vec<&'static str> = app
            .gallery
            .catalog()
            .items()
            .iter()
            .map(|item| item.thumbnail_url)
            .chain(std::iter::once(ANIMATION_5))
            .collect();
        log::info!(
            "starting with {} catalog items from {}, locale {}",
            app.gallery.catalog().len(),
            Catalog::asset_base(),
            app.i18n.current_locale()
        );

        let limits = app.limits;
        let task = Task::batch(urls.into_iter().map(|url| {
            update::request_media(&mut app.media, url, Rendition::Thumbnail, limits)
        }));

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.current_item() {
            Some(item) => format!("{} - {app_name}", item.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.gallery.viewer().is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            media: &mut self.media,
            page: &mut self.page,
            limits: self.limits,
            window: &mut self.window,
            menu_open: &mut self.menu_open,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::MediaLoaded(url, result) => update::handle_media_loaded(&mut ctx, url, result),
            Message::PageScrolled(viewport) => update::handle_page_scrolled(&mut ctx, viewport),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            media: &self.media,
            page: &self.page,
            window: self.window,
            menu_open: self.menu_open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaId;
    use crate::ui::viewer::ViewerState;
    use iced::keyboard::{key::Named, Key};

    fn app() -> App {
        App {
            i18n: I18n::default(),
            gallery: gallery::State::default(),
            media: MediaCache::new(8),
            page: PageScroll::default(),
            limits: FetchLimits::default(),
            theme: Theme::Dark,
            window: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            menu_open: false,
        }
    }

    #[test]
    fn opening_viewer_locks_page_and_requests_media() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::TileActivated(MediaId(2))));

        assert_eq!(app.gallery.viewer(), ViewerState::Open { item: MediaId(2) });
        assert!(app.page.is_locked());
        let url = app
            .gallery
            .current_item()
            .map(|item| item.viewer_url())
            .unwrap_or_default();
        assert!(app.media.state(url).is_some());
    }

    #[test]
    fn closing_viewer_unlocks_page() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::TileActivated(MediaId(1))));
        let _ = app.update(Message::Gallery(gallery::Message::KeyPressed(Key::Named(
            Named::Escape,
        ))));

        assert!(!app.gallery.viewer().is_open());
        assert!(!app.page.is_locked());
    }

    #[test]
    fn title_names_open_item() {
        let mut app = app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        let _ = app.update(Message::Gallery(gallery::Message::TileActivated(MediaId(1))));
        let title = app.title();
        assert!(title.ends_with(&app.i18n.tr("window-title")));
        assert!(title.len() > app.i18n.tr("window-title").len());
    }

    #[test]
    fn window_resize_is_recorded() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert_eq!(app.window, Size::new(500.0, 700.0));
    }
}
