use super::intent::GreetingIntent;
use super::panel::GreetingPanel;
use super::state::GreetingState;
use crate::ui::mvi::Reducer;

impl Reducer for GreetingPanel {
    type State = GreetingState;
    type Intent = GreetingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GreetingIntent::Patch(patch) => patch.merge_into(state),
            GreetingIntent::Update(updater) => updater.apply(&state),
            GreetingIntent::Increment => GreetingState {
                count: state.count.saturating_add(1),
                ..state
            },
        }
    }
}
