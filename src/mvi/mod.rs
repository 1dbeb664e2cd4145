//! Model-View-Intent primitives.
//!
//! Navigation state only ever changes by feeding an intent through a
//! reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Observers
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: self-contained snapshot a renderer can draw from
//! - **Intent**: a navigation request from a screen or a deep link
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
