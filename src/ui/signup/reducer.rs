use crate::domain::SubscriberEmail;
use crate::ui::mvi::Reducer;
use crate::ui::signup::intent::SignupIntent;
use crate::ui::signup::state::{FormFocus, SignupFormState};

pub struct SignupReducer;

impl Reducer for SignupReducer {
    type State = SignupFormState;
    type Intent = SignupIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SignupIntent::Insert(ch) => edit(state, |email| email.push(ch)),
            SignupIntent::Paste(text) => edit(state, |email| {
                email.extend(text.chars().filter(|ch| !ch.is_control()));
            }),
            SignupIntent::Backspace => edit(state, |email| {
                email.pop();
            }),
            SignupIntent::ClearField => edit(state, String::clear),
            SignupIntent::FocusNext => {
                let focus = match state.focus {
                    FormFocus::Input => FormFocus::SubscribeButton,
                    FormFocus::SubscribeButton => FormFocus::Input,
                };
                SignupFormState { focus, ..state }
            }
            SignupIntent::Submit => match SubscriberEmail::parse(state.email.clone()) {
                Ok(email) => SignupFormState {
                    error: None,
                    submission: Some(email),
                    ..state
                },
                Err(err) => SignupFormState {
                    error: Some(err),
                    submission: None,
                    ..state
                },
            },
        }
    }
}

/// Applies an edit to the field and returns focus to it.
///
/// The error survives edits and is only dropped by an edit that empties the
/// field. Edits to an already empty field leave it in place.
fn edit(mut state: SignupFormState, apply: impl FnOnce(&mut String)) -> SignupFormState {
    let was_empty = state.email.is_empty();
    apply(&mut state.email);
    state.focus = FormFocus::Input;
    state.submission = None;
    if !was_empty && state.email.is_empty() {
        state.error = None;
    }
    state
}
