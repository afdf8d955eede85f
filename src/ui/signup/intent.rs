use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupIntent {
    /// Typed character, appended to the field.
    Insert(char),
    /// Bracketed paste. Control characters (including newlines) are dropped.
    Paste(String),
    Backspace,
    /// Ctrl+U: empty the field.
    ClearField,
    /// Tab / Shift+Tab between the field and the subscribe button.
    FocusNext,
    /// Enter in the field, or activating the subscribe button.
    Submit,
}

impl Intent for SignupIntent {}
