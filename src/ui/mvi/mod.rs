//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow between the fetch machinery
//! and the screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
