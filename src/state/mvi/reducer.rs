//! Reducer trait.

use super::intent::Intent;
use super::state::ViewState;

/// The only place where state transitions happen.
pub trait Reducer {
    /// The state this reducer owns.
    type State: ViewState;

    /// The intents it understands.
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
