//! Model-View-Intent primitives shared by the catalog and collections
//! state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything with side effects (HTTP calls, timers,
//! logging of failure causes) happens in the [`Store`](crate::state::Store)
//! around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
