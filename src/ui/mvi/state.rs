//! Base trait for component state in MVI architecture.

/// Marker trait for state snapshots owned by a mounted component.
///
/// States should be:
/// - Replaced, never patched in place (the reducer returns a new snapshot)
/// - Self-contained (everything the render needs besides props)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
