//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Screen actions (tapping a row, pressing back)
/// - Externally supplied requests (deep links)
///
/// Intents are `Clone` so the coordinator can keep them in its
/// transition log after reducing.
pub trait Intent: Clone + Send + 'static {}
