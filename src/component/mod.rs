//! Components and the view tree they render into.

pub mod greeting;
mod view;

pub use view::{Action, ButtonView, Node, View};
