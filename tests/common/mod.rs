//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use stay_updated::config::UiConfig;
use stay_updated::domain::{NavigationPayload, Navigator, PageRegistry, ViewId};
use stay_updated::ui::app::{ActiveView, App};
use stay_updated::ui::input::handle_key;
use stay_updated::ui::render::draw;
use stay_updated::ui::signup::SignupFormState;
use std::sync::Arc;

pub fn make_app() -> App {
    App::new(Arc::new(PageRegistry::new()), &UiConfig::default())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Types `text` into the app one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press_key(KeyCode::Char(ch)));
    }
}

pub fn form(app: &App) -> &SignupFormState {
    match app.view() {
        ActiveView::Home(form) => form,
        ActiveView::Success(_) => panic!("expected the sign-up form to be mounted"),
    }
}

/// Draws one frame into a `width` x `height` buffer and returns its rows.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(" "))
                .collect::<String>()
        })
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

/// Navigator that only records what it was asked to do.
#[derive(Default)]
pub struct RecordingNavigator {
    pub calls: Vec<(ViewId, Option<NavigationPayload>)>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: ViewId, payload: Option<NavigationPayload>) {
        self.calls.push((target, payload));
    }
}
