//! Render-state machine for the product screen.
//!
//! A fetch is turned into an ordered sequence of [`RenderState`] values:
//! `Loading` first, then exactly one terminal state. Transitions go through
//! [`RenderReducer`] so the ordering rules live in one place.
//!
//! ```text
//! Idle ──FetchStarted──→ Loading ──Loaded──→ Success
//!                            │
//!                            └──Failed───→ Failure
//! ```

mod intent;
mod machine;
mod reducer;
mod state;

pub use intent::RenderIntent;
pub use machine::product_states;
pub use reducer::RenderReducer;
pub use state::{ErrorInfo, RenderState};
