//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on events.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Event) -> State
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// Actions the presentation layer dispatches.
    type Action: Intent;

    /// Everything the reducer consumes: wrapped actions plus effect outcomes.
    type Event: Intent + From<Self::Action>;

    /// Process an event and return the new state.
    ///
    /// This must be a pure function with no side effects. Every event
    /// variant has to be matched exhaustively.
    fn reduce(state: Self::State, event: Self::Event) -> Self::State;
}
