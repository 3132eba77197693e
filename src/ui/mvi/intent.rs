//! Base trait for intents (queued update requests) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent requests to change a component's local state:
/// - Partial updates merged into the current snapshot
/// - Updater functions applied to the previous snapshot
/// - Named user actions (button presses)
///
/// Intents are queued by the host and applied by reducers in submission order.
pub trait Intent: Send + 'static {}
