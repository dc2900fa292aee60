use crate::ui::mvi::Reducer;

use super::intent::RenderIntent;
use super::state::RenderState;

/// Reducer for render-state transitions.
///
/// Terminal intents only apply while `Loading`, so a result can never land
/// without a preceding `Loading` and two results can never land back to back.
pub struct RenderReducer;

impl Reducer for RenderReducer {
    type State = RenderState;
    type Intent = RenderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RenderIntent::FetchStarted => RenderState::Loading,

            RenderIntent::Loaded { payload } => match state {
                RenderState::Loading => RenderState::Success { payload },
                other => other,
            },

            RenderIntent::Failed { error } => match state {
                RenderState::Loading => RenderState::Failure { error },
                other => other,
            },

            RenderIntent::Reset => RenderState::Idle,
        }
    }
}
