use super::intent::Intent;
use super::state::UiState;

/// `(State, Intent) -> State`, with no side effects.
///
/// Effects that follow from the new state (navigation after an accepted
/// submission) are performed by the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
