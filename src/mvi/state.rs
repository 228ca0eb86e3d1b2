//! Base trait for application state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (a transition returns a new value)
/// - Self-contained (everything the reducer needs)
/// - Comparable (PartialEq for detecting changes)
pub trait AppState: Clone + PartialEq + Default + Send + 'static {}
