//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the traits a stateful component implements and the
//! host that drives it with unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Props ──→ initialize ──→ State ──→ render ──→ View
//!                           ↑                    │
//!            Reducer ←── Intent ←── user action ─┘
//! ```
//!
//! - **State**: Snapshot of a component's local data
//! - **Intent**: Queued request to change that data
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Component**: Reducer plus `initialize` and `render`
//! - **Host**: Owns one mounted component and applies intents in order

mod component;
mod host;
mod intent;
mod reducer;
mod state;

pub use component::Component;
pub use host::Host;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
