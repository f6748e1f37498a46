//! Model-View-Intent primitives for screen-local UI state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Dialog and focus state go through a reducer. The counter value does
//! not: it lives in [`crate::counter::CounterStore`] and reaches views
//! by observer notification or, for the prime dialog, by value inside
//! an intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
