use crate::component::greeting::{GreetingIntent, GreetingPanel, GreetingProps, GreetingState};
use crate::component::{Action, View};
use crate::ui::mvi::{Component, Host};

/// Application shell. Composes a single greeting panel and owns its host.
pub struct App {
    should_quit: bool,
    panel: Host<GreetingPanel>,
    /// Index into the panel's buttons, in document order.
    focused: usize,
}

impl App {
    pub fn new(props: GreetingProps) -> Self {
        Self {
            should_quit: false,
            panel: Host::mount(props),
            focused: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panel(&self) -> &Host<GreetingPanel> {
        &self.panel
    }

    pub fn needs_redraw(&self) -> bool {
        self.panel.needs_render()
    }

    /// Settled view of the panel. Applies queued intents first.
    pub fn view(&mut self) -> &View {
        self.panel.view()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Button actions for the current props and settled state.
    ///
    /// Input handling must not settle the queue or count as a host render,
    /// so this calls the pure render directly.
    fn button_actions(&self) -> Vec<Action> {
        GreetingPanel::render(self.panel.props(), self.panel.state())
            .buttons()
            .iter()
            .map(|button| button.action)
            .collect()
    }

    /// Move button focus by `delta`, wrapping at both ends.
    pub fn move_focus(&mut self, delta: isize) {
        let count = self.button_actions().len();
        if count == 0 {
            self.focused = 0;
            return;
        }
        let current = self.focused.min(count - 1) as isize;
        self.focused = (current + delta).rem_euclid(count as isize) as usize;
    }

    /// Press whichever button has focus.
    pub fn press_focused(&mut self) {
        if let Some(action) = self.button_actions().get(self.focused).copied() {
            self.trigger(action);
        }
    }

    pub fn trigger(&mut self, action: Action) {
        tracing::debug!(?action, "button pressed");
        match action {
            Action::Increment => self.panel.dispatch(GreetingIntent::Increment),
            Action::Exit => self.request_quit(),
        }
    }

    /// Increment shortcut. Ignored while the counter is hidden.
    pub fn increment(&mut self) {
        if self.panel.props().show_counter {
            self.trigger(Action::Increment);
        }
    }

    /// Re-compose the panel with the counter shown or hidden. State survives.
    pub fn toggle_counter(&mut self) {
        let mut props = self.panel.props().clone();
        props.show_counter = !props.show_counter;
        self.panel.recompose(props);
        let count = self.button_actions().len();
        self.focused = self.focused.min(count.saturating_sub(1));
    }

    /// Unmount the panel and return its final state.
    pub fn shutdown(self) -> GreetingState {
        self.panel.unmount()
    }
}
