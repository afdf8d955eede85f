use crate::domain::{NavigationIntent, NavigationPayload, FALLBACK_EMAIL};

/// Confirmation view, mounted from the payload of the transition that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessState {
    email: String,
}

impl Default for SuccessState {
    fn default() -> Self {
        Self::mount(None)
    }
}

impl SuccessState {
    /// Opening without a payload (direct navigation) shows [`FALLBACK_EMAIL`].
    pub fn mount(payload: Option<&NavigationPayload>) -> Self {
        let email = payload
            .map(|payload| payload.email_address.clone())
            .unwrap_or_else(|| FALLBACK_EMAIL.to_string());
        Self { email }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The view's only outgoing action.
    pub fn dismiss(&self) -> NavigationIntent {
        NavigationIntent::dismiss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViewId;

    #[test]
    fn mount_without_payload_uses_fallback() {
        assert_eq!(SuccessState::mount(None).email(), "test@example.com");
        assert_eq!(SuccessState::default().email(), "test@example.com");
    }

    #[test]
    fn mount_with_payload_shows_it() {
        let payload = NavigationPayload::new("user@example.com");
        assert_eq!(SuccessState::mount(Some(&payload)).email(), "user@example.com");
    }

    #[test]
    fn dismiss_targets_home_without_payload() {
        let intent = SuccessState::default().dismiss();
        assert_eq!(intent.target, ViewId::Home);
        assert!(intent.payload.is_none());
    }
}
