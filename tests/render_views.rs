//! Frame rendering against ratatui's `TestBackend`.

mod common;

use common::*;
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use stay_updated::domain::NavigationPayload;
use stay_updated::ui::input::handle_key;
use stay_updated::ui::layout::LayoutMode;
use stay_updated::ui::signup::view::render_signup_form;
use stay_updated::ui::signup::SignupFormState;
use stay_updated::ui::success::view::confirmation_text;
use stay_updated::ui::theme::{ERROR_PLACEHOLDER, ERROR_TINT, GREY, TOMATO};

const WIDE: (u16, u16) = (120, 32);
const NARROW: (u16, u16) = (60, 40);

fn draw_form(state: &SignupFormState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDE.0, WIDE.1)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_signup_form(frame, area, state, LayoutMode::Wide);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Position of the first cell where `text` starts on a single row.
fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    (0..area.height)
        .flat_map(|y| (0..area.width).map(move |x| (x, y)))
        .find(|&(x, y)| {
            text.chars().enumerate().all(|(offset, ch)| {
                buffer
                    .cell((x + offset as u16, y))
                    .is_some_and(|cell| cell.symbol() == ch.to_string())
            })
        })
}

#[test]
fn home_view_shows_page_copy() {
    let app = make_app();
    let rows = render_rows(&app, WIDE.0, WIDE.1);
    for text in [
        "Stay updated!",
        "Product discovery and building what matters",
        "Measuring to ensure updates are successful",
        "And much more!",
        "Email address",
        "email@company.com",
        "Subscribe to monthly newsletter",
    ] {
        assert!(screen_contains(&rows, text), "missing '{text}'");
    }
    assert!(!screen_contains(&rows, "Valid email required"));
}

#[test]
fn error_message_appears_after_invalid_submit() {
    let mut app = make_app();
    type_text(&mut app, "invalid-email@email");
    handle_key(&mut app, press_key(KeyCode::Enter));
    let rows = render_rows(&app, WIDE.0, WIDE.1);
    assert!(screen_contains(&rows, "Valid email required"));
    assert!(screen_contains(&rows, "invalid-email@email"));
}

#[test]
fn repeated_invalid_submits_show_one_message() {
    let mut app = make_app();
    for _ in 0..3 {
        handle_key(&mut app, press_key(KeyCode::Enter));
    }
    let rows = render_rows(&app, WIDE.0, WIDE.1);
    let count: usize = rows
        .iter()
        .map(|row| row.matches("Valid email required").count())
        .sum();
    assert_eq!(count, 1);
}

#[test]
fn errored_input_uses_error_colors() {
    let state = SignupFormState {
        email: "nope".to_string(),
        error: Some(stay_updated::domain::ValidationError::Malformed),
        ..SignupFormState::default()
    };
    let buffer = draw_form(&state);
    let typed = find_text(&buffer, "nope").expect("typed value is drawn");
    let cell = buffer.cell(typed).unwrap();
    assert_eq!(cell.fg, TOMATO);
    assert_eq!(cell.bg, ERROR_TINT);
}

#[test]
fn placeholder_is_tinted_while_errored() {
    let clean = draw_form(&SignupFormState::default());
    let at = find_text(&clean, "email@company.com").expect("placeholder is drawn");
    assert_eq!(clean.cell(at).unwrap().fg, GREY);

    let state = SignupFormState {
        error: Some(stay_updated::domain::ValidationError::Empty),
        ..SignupFormState::default()
    };
    let errored = draw_form(&state);
    let at = find_text(&errored, "email@company.com").expect("placeholder is drawn");
    let cell = errored.cell(at).unwrap();
    assert_eq!(cell.fg, ERROR_PLACEHOLDER);
    assert_eq!(cell.bg, ERROR_TINT);
}

#[test]
fn success_body_reads_as_one_sentence() {
    let mut app = make_app();
    app.open("/success", Some(NavigationPayload::new("user@example.com")))
        .unwrap();
    let text = render_rows(&app, WIDE.0, WIDE.1)
        .iter()
        .map(|row| row.trim().trim_matches('│').trim().to_string())
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    assert!(
        text.contains(&confirmation_text("user@example.com")),
        "body not found in: {text}"
    );
}

#[test]
fn success_view_without_payload_shows_fallback() {
    let mut app = make_app();
    app.open("/success", None).unwrap();
    let rows = render_rows(&app, WIDE.0, WIDE.1);
    assert!(screen_contains(&rows, "Thanks for subscribing!"));
    assert!(screen_contains(&rows, "test@example.com"));
    assert!(screen_contains(&rows, "Dismiss message"));
}

#[test]
fn success_view_shows_submitted_address() {
    let mut app = make_app();
    app.open("/success", Some(NavigationPayload::new("user@example.com")))
        .unwrap();
    let rows = render_rows(&app, WIDE.0, WIDE.1);
    assert!(screen_contains(&rows, "user@example.com"));
    assert!(!screen_contains(&rows, "test@example.com"));
    assert!(screen_contains(&rows, "A confirmation email has been sent to"));
}

#[test]
fn narrow_terminal_still_shows_form() {
    let app = make_app();
    let rows = render_rows(&app, NARROW.0, NARROW.1);
    assert!(screen_contains(&rows, "Stay updated!"));
    assert!(screen_contains(&rows, "Subscribe to monthly newsletter"));
}

#[test]
fn layout_switches_at_breakpoint() {
    let app = make_app();
    assert_eq!(app.layout_mode(99), LayoutMode::Narrow);
    assert_eq!(app.layout_mode(100), LayoutMode::Wide);
}

#[test]
fn footer_hints_follow_the_view() {
    let mut app = make_app();
    let rows = render_rows(&app, WIDE.0, WIDE.1);
    assert!(rows.last().unwrap().contains("Enter: Subscribe"));

    app.open("/success", None).unwrap();
    let rows = render_rows(&app, WIDE.0, WIDE.1);
    assert!(rows.last().unwrap().contains("Enter: Dismiss"));
}
