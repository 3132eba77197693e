use std::fmt;
use std::sync::Arc;

use super::state::GreetingState;
use crate::ui::mvi::Intent;

/// Partial state update. `None` fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingPatch {
    pub introduction: Option<String>,
    pub button_text: Option<String>,
    pub count: Option<i64>,
}

impl GreetingPatch {
    pub(super) fn merge_into(self, state: GreetingState) -> GreetingState {
        GreetingState {
            introduction: self.introduction.unwrap_or(state.introduction),
            button_text: self.button_text.unwrap_or(state.button_text),
            count: self.count.unwrap_or(state.count),
        }
    }
}

type UpdateFn = dyn Fn(&GreetingState) -> GreetingState + Send + Sync;

/// Pure function from the previous snapshot to the next one.
#[derive(Clone)]
pub struct Updater(Arc<UpdateFn>);

impl Updater {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&GreetingState) -> GreetingState + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(super) fn apply(&self, previous: &GreetingState) -> GreetingState {
        (self.0)(previous)
    }
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Updater(..)")
    }
}

#[derive(Debug, Clone)]
pub enum GreetingIntent {
    /// Merge the given fields into the current state.
    Patch(GreetingPatch),
    /// Replace the state with a function of the previous snapshot.
    Update(Updater),
    /// Counter button pressed. Same as an updater adding one to `count`.
    Increment,
}

impl GreetingIntent {
    pub fn update<F>(f: F) -> Self
    where
        F: Fn(&GreetingState) -> GreetingState + Send + Sync + 'static,
    {
        Self::Update(Updater::new(f))
    }
}

impl Intent for GreetingIntent {}
