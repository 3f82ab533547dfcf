// SPDX-License-Identifier: MPL-2.0
use iced::keyboard::{key::Named, Key};
use iced::touch::{self, Finger};
use iced::Point;
use iced_gallery::config::{self, Config};
use iced_gallery::domain::media::{filter, Catalog, Category, MediaId};
use iced_gallery::i18n::I18n;
use iced_gallery::ui::gallery::{Message, State};
use iced_gallery::ui::viewer::{Effect, ViewerState};
use tempfile::tempdir;

fn gallery() -> State {
    State::new(Catalog::builtin().clone(), config::DEFAULT_SWIPE_THRESHOLD)
}

fn open(state: &mut State, id: u32) {
    assert_eq!(
        state.handle(Message::TileActivated(MediaId(id))),
        Effect::Opened(MediaId(id))
    );
}

fn touch(state: &mut State, event: touch::Event) -> Effect {
    state.handle(Message::Touch(event))
}

fn swipe(state: &mut State, from: f32, to: f32) -> Effect {
    let id = Finger(0);
    touch(state, touch::Event::FingerPressed { id, position: Point::new(from, 200.0) });
    touch(state, touch::Event::FingerMoved { id, position: Point::new(to, 200.0) });
    touch(state, touch::Event::FingerLifted { id, position: Point::new(to, 200.0) })
}

#[test]
fn arrow_right_from_first_wraps_after_last() {
    let mut state = gallery();
    open(&mut state, 1);

    let mut seen = Vec::new();
    for _ in 0..5 {
        state.handle(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        seen.push(state.viewer().current());
    }

    let expected: Vec<Option<MediaId>> = [2, 3, 4, 5, 1].into_iter().map(|id| Some(MediaId(id))).collect();
    assert_eq!(seen, expected);
}

#[test]
fn arrow_right_cycles_through_all_items() {
    let mut state = gallery();
    open(&mut state, 2);

    let mut seen = Vec::new();
    for _ in 0..4 {
        state.handle(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        seen.push(state.viewer().current());
    }

    let expected: Vec<Option<MediaId>> = [3, 4, 5, 1].into_iter().map(|id| Some(MediaId(id))).collect();
    assert_eq!(seen, expected);
}

#[test]
fn arrow_keys_wrap_at_both_ends() {
    let mut state = gallery();
    let last = Catalog::builtin().items().last().map(|item| item.id).unwrap_or(MediaId(1));

    open(&mut state, last.value());
    state.handle(Message::KeyPressed(Key::Named(Named::ArrowRight)));
    assert_eq!(state.viewer().current(), Some(MediaId(1)));

    state.handle(Message::KeyPressed(Key::Named(Named::ArrowLeft)));
    assert_eq!(state.viewer().current(), Some(last));
}

#[test]
fn swipe_left_advances_and_swipe_right_retreats() {
    let mut state = gallery();
    open(&mut state, 3);

    assert_eq!(swipe(&mut state, 300.0, 200.0), Effect::Shown(MediaId(4)));
    assert_eq!(swipe(&mut state, 200.0, 300.0), Effect::Shown(MediaId(3)));
}

#[test]
fn tap_without_move_does_not_navigate() {
    let mut state = gallery();
    open(&mut state, 3);

    let id = Finger(0);
    touch(&mut state, touch::Event::FingerPressed { id, position: Point::new(300.0, 200.0) });
    let effect = touch(&mut state, touch::Event::FingerLifted { id, position: Point::new(200.0, 200.0) });

    assert_eq!(effect, Effect::None);
    assert_eq!(state.viewer().current(), Some(MediaId(3)));
}

#[test]
fn short_swipe_is_ignored() {
    let mut state = gallery();
    open(&mut state, 3);

    assert_eq!(swipe(&mut state, 300.0, 250.0), Effect::None);
    assert_eq!(state.viewer().current(), Some(MediaId(3)));
}

#[test]
fn video_category_has_single_item() {
    let catalog = Catalog::builtin();
    assert_eq!(filter::filter(catalog.items(), Category::Video).len(), 1);
    assert_eq!(
        filter::filter(catalog.items(), Category::All).len(),
        catalog.len()
    );
}

#[test]
fn navigation_stays_inside_filtered_view() {
    let mut state = gallery();
    state.handle(Message::CategorySelected(Category::Portfolio));
    let view: Vec<MediaId> = state.filtered_view().iter().map(|item| item.id).collect();
    assert!(view.len() > 1);

    open(&mut state, view[0].value());
    for expected in view.iter().skip(1).chain(view.first()) {
        state.handle(Message::NextRequested);
        assert_eq!(state.viewer().current(), Some(*expected));
    }
}

#[test]
fn keys_do_nothing_after_close() {
    let mut state = gallery();
    open(&mut state, 1);

    assert_eq!(
        state.handle(Message::KeyPressed(Key::Named(Named::Escape))),
        Effect::Closed
    );
    assert_eq!(
        state.handle(Message::KeyPressed(Key::Named(Named::ArrowRight))),
        Effect::None
    );
    assert_eq!(state.viewer(), ViewerState::Closed);
}

#[test]
fn category_change_closes_viewer_when_item_leaves_view() {
    let mut state = gallery();
    let video = filter::filter(Catalog::builtin().items(), Category::Video)[0].id;
    open(&mut state, video.value());

    assert_eq!(
        state.handle(Message::CategorySelected(Category::Nature)),
        Effect::Closed
    );
    assert_eq!(state.category(), Category::Nature);
}

#[test]
fn config_round_trip_drives_locale_and_swipe_threshold() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("ru".to_string());
    initial.viewer.swipe_threshold = Some(80.0);
    config::save_to_path(&initial, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, initial);
    assert_eq!(loaded.swipe_threshold(), 80.0);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");
    assert_eq!(i18n.tr("category-all"), "Все");

    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(english.tr("category-all"), "All");
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "not = [valid")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
