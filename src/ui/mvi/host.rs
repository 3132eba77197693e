//! Single-instance component host.
//!
//! The host plays the part of the rendering engine for one mounted
//! component. It owns the props, the state snapshot and a FIFO queue of
//! pending intents:
//!
//! ```text
//! dispatch ──→ queue ──→ settle (reduce in order) ──→ render ──→ View
//! ```
//!
//! Every method that touches state takes `&mut self`, so a render can never
//! overlap with a half-applied update.

use std::any::type_name;
use std::collections::VecDeque;

use super::component::Component;
use super::reducer::Reducer;
use crate::component::View;

pub struct Host<C: Component> {
    props: C::Props,
    state: C::State,
    queue: VecDeque<C::Intent>,
    /// Last rendered view. `None` means props or state changed since.
    view: Option<View>,
    renders: u64,
}

impl<C: Component> Host<C> {
    /// Mount a component: run `initialize` once and schedule the first render.
    pub fn mount(props: C::Props) -> Self {
        let state = C::initialize(&props);
        tracing::debug!(component = type_name::<C>(), "mounted");
        Self {
            props,
            state,
            queue: VecDeque::new(),
            view: None,
            renders: 0,
        }
    }

    pub fn props(&self) -> &C::Props {
        &self.props
    }

    /// Current settled state. Intents still in the queue are not reflected.
    pub fn state(&self) -> &C::State {
        &self.state
    }

    /// Number of intents queued but not yet applied.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of times `render` has been called on this instance.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn needs_render(&self) -> bool {
        self.view.is_none() || !self.queue.is_empty()
    }

    /// Queue a state update. It takes effect at the next settle.
    pub fn dispatch(&mut self, intent: C::Intent) {
        self.queue.push_back(intent);
        tracing::trace!(
            component = type_name::<C>(),
            pending = self.queue.len(),
            "intent queued"
        );
    }

    /// Apply every queued intent in submission order.
    ///
    /// Returns how many intents were applied. Any non-zero count invalidates
    /// the last view, so the next [`view`](Self::view) renders exactly once.
    /// If an intent panics, the queue is consumed and the previous state and
    /// view stay current.
    pub fn settle(&mut self) -> usize {
        let applied = self.queue.len();
        if applied == 0 {
            return 0;
        }

        // Reduce a copy so a panicking intent leaves the settled state and
        // its cached view in place.
        let next = <C as Reducer>::reduce_all(self.state.clone(), self.queue.drain(..));
        let changed = next != self.state;
        self.state = next;
        self.view = None;

        tracing::debug!(
            component = type_name::<C>(),
            applied,
            changed,
            "state settled"
        );
        applied
    }

    /// Replace props from the parent composition. Local state is kept.
    pub fn recompose(&mut self, props: C::Props) {
        self.props = props;
        self.view = None;
        tracing::trace!(component = type_name::<C>(), "props replaced");
    }

    /// Settle pending updates and return the view for the settled state.
    ///
    /// Renders only when props or state changed since the previous call.
    pub fn view(&mut self) -> &View {
        self.settle();
        let props = &self.props;
        let state = &self.state;
        let renders = &mut self.renders;
        self.view.get_or_insert_with(|| {
            *renders += 1;
            tracing::trace!(component = type_name::<C>(), render = *renders, "render");
            C::render(props, state)
        })
    }

    /// Remove the instance from the tree and hand back its final state.
    ///
    /// Intents still queued are dropped without being applied.
    pub fn unmount(self) -> C::State {
        if !self.queue.is_empty() {
            tracing::warn!(
                component = type_name::<C>(),
                dropped = self.queue.len(),
                "unmounted with pending intents"
            );
        }
        tracing::debug!(component = type_name::<C>(), renders = self.renders, "unmounted");
        self.state
    }
}
