//! Navigation intents and the router that executes them.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::email::{SubscriberEmail, ValidationError};
use crate::domain::pages::{PageRegistry, ViewId};

/// Address shown on the success view when it is opened without a payload.
pub const FALLBACK_EMAIL: &str = "test@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPayload {
    pub email_address: String,
}

impl NavigationPayload {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
        }
    }
}

/// A requested transition, executed by a [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target: ViewId,
    pub payload: Option<NavigationPayload>,
}

impl NavigationIntent {
    pub fn to(target: ViewId) -> Self {
        Self {
            target,
            payload: None,
        }
    }

    /// Success view's outgoing action.
    pub fn dismiss() -> Self {
        Self::to(ViewId::Home)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No page is registered at '{path}'")]
    UnknownPath { path: String },
}

pub trait Navigator {
    fn navigate(&mut self, target: ViewId, payload: Option<NavigationPayload>);

    fn execute(&mut self, intent: NavigationIntent) {
        self.navigate(intent.target, intent.payload);
    }
}

/// Builds the transition for an accepted address.
pub fn on_submit(email: SubscriberEmail) -> NavigationIntent {
    NavigationIntent {
        target: ViewId::Success,
        payload: Some(NavigationPayload::new(email.into_inner())),
    }
}

/// Validates `input` and, only when it is valid, navigates to the success view.
///
/// The navigator is not touched on failure. This is the reference gate for
/// any front end. The terminal app mirrors it in two steps because the form
/// reducer has to record the error: `SignupIntent::Submit` parses the field,
/// then `App::dispatch_signup` hands an accepted address to [`on_submit`].
pub fn submit<N: Navigator + ?Sized>(input: &str, navigator: &mut N) -> Result<(), ValidationError> {
    let email = SubscriberEmail::parse(input.to_string())?;
    navigator.execute(on_submit(email));
    Ok(())
}

/// Where the router currently points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub view: ViewId,
    pub path: &'static str,
    pub payload: Option<NavigationPayload>,
}

pub struct Router {
    pages: Arc<PageRegistry>,
    current: Location,
    history: Vec<NavigationIntent>,
}

impl Router {
    /// Router positioned at the home view.
    pub fn new(pages: Arc<PageRegistry>) -> Self {
        let current = Location {
            view: ViewId::Home,
            path: pages.path(ViewId::Home),
            payload: None,
        };
        Self {
            pages,
            current,
            history: Vec::new(),
        }
    }

    /// Direct navigation by path, as when the app is launched on `/success`.
    pub fn open(
        &mut self,
        path: &str,
        payload: Option<NavigationPayload>,
    ) -> Result<ViewId, NavigationError> {
        let target = self
            .pages
            .by_path(path)
            .map(|page| page.id)
            .ok_or_else(|| NavigationError::UnknownPath {
                path: path.to_string(),
            })?;
        self.navigate(target, payload);
        Ok(target)
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    /// Executed transitions, oldest first.
    pub fn history(&self) -> &[NavigationIntent] {
        &self.history
    }

    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }
}

impl Navigator for Router {
    fn navigate(&mut self, target: ViewId, payload: Option<NavigationPayload>) {
        let path = self.pages.path(target);
        tracing::info!(
            from = self.current.path,
            to = path,
            with_payload = payload.is_some(),
            "Navigating"
        );
        self.history.push(NavigationIntent {
            target,
            payload: payload.clone(),
        });
        self.current = Location {
            view: target,
            path,
            payload,
        };
    }
}
