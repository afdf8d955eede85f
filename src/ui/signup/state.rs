use crate::domain::{SubscriberEmail, ValidationError};
use crate::ui::mvi::UiState;

pub const PLACEHOLDER: &str = "email@company.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Input,
    SubscribeButton,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupFormState {
    pub email: String,
    /// Set by a rejected submission. Cleared by an accepted one or by the
    /// field becoming empty; ordinary edits leave it in place.
    pub error: Option<ValidationError>,
    pub focus: FormFocus,
    /// Address accepted by the last submission, waiting to be navigated with.
    pub submission: Option<SubscriberEmail>,
}

impl UiState for SignupFormState {}

impl SignupFormState {
    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(ValidationError::user_message)
    }

    /// Text drawn in the field: the value, or the placeholder while empty.
    pub fn display_text(&self) -> &str {
        if self.email.is_empty() {
            PLACEHOLDER
        } else {
            &self.email
        }
    }
}
