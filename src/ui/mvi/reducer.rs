use super::intent::Intent;
use super::state::UiState;

/// The only place a [`UiState`] transitions: `(State, Intent) -> State`.
///
/// Implementations must stay free of side effects. Anything an intent
/// needs from outside (such as the current count) travels inside it.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
