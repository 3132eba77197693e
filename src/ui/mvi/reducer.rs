//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer folds intents into state.
///
/// `reduce` is the only place a component's local state changes. It must be
/// pure: the next snapshot depends on nothing but the previous snapshot and
/// the intent.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Apply one intent to the previous snapshot and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply intents in iteration order, each to the result of the one before.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
