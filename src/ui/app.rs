use crate::config::UiConfig;
use crate::domain::{
    on_submit, Location, NavigationError, NavigationIntent, NavigationPayload, Navigator,
    PageRegistry, Router, ViewId,
};
use crate::ui::layout::LayoutMode;
use crate::ui::mvi::Reducer;
use crate::ui::signup::{SignupFormState, SignupIntent, SignupReducer};
use crate::ui::success::SuccessState;
use std::sync::Arc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($state:expr, $reducer:ty, $intent:expr) => {
        *$state = <$reducer>::reduce(std::mem::take($state), $intent);
    };
}

/// The mounted view. Navigating replaces it, so the form is always fresh on `/`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    Home(SignupFormState),
    Success(SuccessState),
}

impl ActiveView {
    pub fn mount(location: &Location) -> Self {
        match location.view {
            ViewId::Home => ActiveView::Home(SignupFormState::default()),
            ViewId::Success => ActiveView::Success(SuccessState::mount(location.payload.as_ref())),
        }
    }

    pub fn id(&self) -> ViewId {
        match self {
            ActiveView::Home(_) => ViewId::Home,
            ActiveView::Success(_) => ViewId::Success,
        }
    }
}

pub struct App {
    should_quit: bool,
    router: Router,
    view: ActiveView,
    wide_breakpoint: u16,
}

impl App {
    pub fn new(pages: Arc<PageRegistry>, ui: &UiConfig) -> Self {
        let router = Router::new(pages);
        let view = ActiveView::mount(router.current());
        Self {
            should_quit: false,
            router,
            view,
            wide_breakpoint: ui.wide_breakpoint,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn layout_mode(&self, width: u16) -> LayoutMode {
        LayoutMode::for_width(width, self.wide_breakpoint)
    }

    /// Direct navigation by route path.
    pub fn open(
        &mut self,
        path: &str,
        payload: Option<NavigationPayload>,
    ) -> Result<(), NavigationError> {
        self.router.open(path, payload)?;
        self.view = ActiveView::mount(self.router.current());
        Ok(())
    }

    /// Feeds an intent to the sign-up form. Ignored unless the form is mounted.
    ///
    /// An accepted submission navigates to the success view. Submitting
    /// behaves like [`crate::domain::submit`] with the router as navigator.
    pub fn dispatch_signup(&mut self, intent: SignupIntent) {
        let ActiveView::Home(form) = &mut self.view else {
            return;
        };
        let submitting = intent == SignupIntent::Submit;
        dispatch_mvi!(form, SignupReducer, intent);

        if let Some(email) = form.submission.take() {
            tracing::info!(domain = email.domain(), "Subscription accepted");
            self.navigate(on_submit(email));
        } else if submitting {
            tracing::debug!(error = ?form.error, "Submission rejected");
        }
    }

    pub fn submit(&mut self) {
        self.dispatch_signup(SignupIntent::Submit);
    }

    /// Leaves the success view. Ignored elsewhere.
    pub fn dismiss(&mut self) {
        let ActiveView::Success(success) = &self.view else {
            return;
        };
        let intent = success.dismiss();
        self.navigate(intent);
    }

    fn navigate(&mut self, intent: NavigationIntent) {
        self.router.execute(intent);
        self.view = ActiveView::mount(self.router.current());
    }
}
