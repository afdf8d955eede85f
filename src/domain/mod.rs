//! Form validation and navigation rules, independent of the terminal.

pub mod email;
pub mod navigation;
pub mod pages;

pub use email::{
    validate, SubscriberEmail, ValidationError, ValidationResult, VALIDATION_MESSAGE,
};
pub use navigation::{
    on_submit, submit, Location, NavigationError, NavigationIntent, NavigationPayload, Navigator,
    Router, FALLBACK_EMAIL,
};
pub use pages::{Page, PageRegistry, ViewId};
