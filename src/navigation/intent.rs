//! Navigation intents.

use crate::mvi::Intent;
use crate::route::Route;

/// Requests the coordinator reduces into a new [`NavState`](super::NavState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Push a destination on the focused tab, or switch tabs for
    /// [`Route::TabSelection`].
    Navigate(Route),
    /// Pop the focused tab's top route. No-op at the root.
    Back,
    /// Clear the focused tab's stack.
    ToRoot,
}

impl Intent for NavIntent {}

impl std::fmt::Display for NavIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavIntent::Navigate(route) => write!(f, "navigate {}", route),
            NavIntent::Back => f.write_str("back"),
            NavIntent::ToRoot => f.write_str("root"),
        }
    }
}
