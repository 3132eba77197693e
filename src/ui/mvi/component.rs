//! Component contract: props in, view out, state through the reducer.

use super::reducer::Reducer;
use crate::component::View;

/// A stateful UI component.
///
/// A component is a reducer plus two pure functions. The host calls
/// [`initialize`](Component::initialize) once when the component is mounted,
/// feeds queued intents through [`Reducer::reduce`], and calls
/// [`render`](Component::render) whenever props or state have changed.
///
/// Both functions only borrow their inputs, so neither can mutate props or
/// state while producing its result.
pub trait Component: Reducer {
    /// Inputs supplied by the parent composition. Read-only to the component.
    type Props: Clone + Send + 'static;

    /// Build the initial local state. Must not fail for any props.
    fn initialize(props: &Self::Props) -> Self::State;

    /// Derive the view from the current props and state snapshot.
    ///
    /// Calling this twice with the same inputs must return equal views.
    fn render(props: &Self::Props, state: &Self::State) -> View;
}
