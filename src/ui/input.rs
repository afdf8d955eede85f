use crate::ui::app::{ActiveView, App};
use crate::ui::signup::{FormFocus, SignupIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    let focus = match app.view() {
        ActiveView::Home(form) => Some(form.focus),
        ActiveView::Success(_) => None,
    };

    match focus {
        Some(focus) => handle_form_key(app, key, focus),
        None => handle_success_key(app, key),
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    app.dispatch_signup(SignupIntent::Paste(text.to_string()));
}

fn handle_form_key(app: &mut App, key: KeyEvent, focus: FormFocus) {
    if is_ctrl_char(key, 'u') {
        app.dispatch_signup(SignupIntent::ClearField);
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_signup(SignupIntent::FocusNext),
        // Enter in the field and activating the button are the same submission.
        KeyCode::Enter => app.submit(),
        KeyCode::Char(' ') if focus == FormFocus::SubscribeButton => app.submit(),
        KeyCode::Backspace => app.dispatch_signup(SignupIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_signup(SignupIntent::Insert(ch)),
        _ => {}
    }
}

fn handle_success_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('d') => app.dismiss(),
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
