//! Email address syntax check gating the sign-up form.
//!
//! The accepted shape is `local-part@label.label.tld`:
//! - local part: `[A-Za-z0-9_'+-.]`, not starting with `.`, ending in a non-dot
//! - domain: one or more dot-terminated labels followed by an alphabetic TLD
//!   of at least two letters
//! - no `..` anywhere
//!
//! Input is checked exactly as typed. Surrounding whitespace is not trimmed,
//! so `" user@example.com"` is rejected.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Message shown next to the field whenever validation fails.
pub const VALIDATION_MESSAGE: &str = "Valid email required";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Why an input was rejected. Both kinds surface the same message to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Valid email required")]
    Empty,
    #[error("Valid email required")]
    Malformed,
}

impl ValidationError {
    /// User-facing message for display.
    pub fn user_message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

/// Outcome of a single submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(*err),
        }
    }
}

impl From<ValidationResult> for Result<(), ValidationError> {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(err) => Err(err),
        }
    }
}

pub fn validate(input: &str) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::Invalid(ValidationError::Empty);
    }
    if input.starts_with('.') || input.contains("..") || !EMAIL_PATTERN.is_match(input) {
        return ValidationResult::Invalid(ValidationError::Malformed);
    }
    ValidationResult::Valid
}

/// An address that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(input: String) -> Result<Self, ValidationError> {
        Result::<(), ValidationError>::from(validate(&input))?;
        Ok(Self(input))
    }

    /// Part after the `@`. Used for logging instead of the full address.
    pub fn domain(&self) -> &str {
        self.0
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
