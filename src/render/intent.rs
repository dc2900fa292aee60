//! Intents driving the render-state machine.

use crate::ui::mvi::Intent;

use super::state::ErrorInfo;

#[derive(Debug, Clone)]
pub enum RenderIntent {
    /// A fetch has begun.
    FetchStarted,

    /// The fetch returned the product.
    Loaded { payload: String },

    /// The fetch failed.
    Failed { error: ErrorInfo },

    /// Back to the blank screen.
    Reset,
}

impl Intent for RenderIntent {}
