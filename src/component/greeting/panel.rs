use super::props::GreetingProps;
use super::state::GreetingState;
use crate::component::{Action, Node, View};
use crate::ui::mvi::Component;

pub const INCREMENT_LABEL: &str = "Increment Count";
const CONTAINER_CLASS: &str = "greeting";

/// Stateful greeting: an introduction from local state, a greeting from
/// props, an exit button and an optional click counter.
pub struct GreetingPanel;

impl Component for GreetingPanel {
    type Props = GreetingProps;

    fn initialize(_props: &GreetingProps) -> GreetingState {
        GreetingState::default()
    }

    fn render(props: &GreetingProps, state: &GreetingState) -> View {
        let mut children = vec![Node::heading(
            1,
            join_segments(&[state.introduction.as_str(), props.greeting.as_str()]),
        )];

        if props.show_counter {
            if let Some(name) = props.name.as_deref().filter(|name| !name.is_empty()) {
                children.push(Node::heading(2, format!("Hello, {name}")));
            }
            children.push(Node::heading(
                2,
                format!("You've clicked {} times", state.count),
            ));
            children.push(Node::button(INCREMENT_LABEL, Action::Increment));
        }

        children.push(Node::button(state.button_text.as_str(), Action::Exit));
        View::new(Node::container(Some(CONTAINER_CLASS), children))
    }
}

/// Join with single spaces, skipping empty segments.
fn join_segments(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
