//! Base trait for reducible state.

/// Marker trait for state objects.
///
/// States should be:
/// - Cloneable (observers receive snapshots, never the live value)
/// - Comparable (PartialEq decides whether a transition changed anything)
/// - Defaultable (the initial state of a fresh coordinator)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
