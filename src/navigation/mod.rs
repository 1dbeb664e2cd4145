//! Navigation state feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `stack.rs` - Per-tab history (`NavigationStack`, `TabStacks`)
//! - `state.rs` - Selected tab plus stacks (`NavState`)
//! - `intent.rs` - Navigation requests (Navigate, Back, ToRoot)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `coordinator.rs` - Shared owner of the state, observers, deep links

mod coordinator;
mod intent;
mod reducer;
mod stack;
mod state;

pub use coordinator::{NavigationCoordinator, Subscription, TransitionLogEntry};
pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use stack::{NavigationStack, TabStacks};
pub use state::NavState;
