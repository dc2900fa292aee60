use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::future::{self, FutureExt};
use futures_util::stream::{self, Stream, StreamExt};

use crate::client::{FetchError, ProductSource};
use crate::ui::mvi::Reducer;

use super::intent::RenderIntent;
use super::reducer::RenderReducer;
use super::state::{ErrorInfo, RenderState};

/// States produced by one fetch of `source`.
///
/// The stream is lazy: nothing happens until it is polled, and the source is
/// only called once `Loading` has been taken. It yields `Loading`, then one
/// `Success` or `Failure`, then ends. A panic while starting or running the
/// fetch is reported as an `Unexpected` failure instead of unwinding through
/// the consumer.
pub fn product_states<S: ProductSource>(
    source: Arc<S>,
) -> impl Stream<Item = RenderState> + Send + 'static {
    let loading = RenderReducer::reduce(RenderState::Idle, RenderIntent::FetchStarted);

    let terminal = async move {
        let outcome = AssertUnwindSafe(async move { source.fetch_product().await })
            .catch_unwind()
            .await;

        let result = match outcome {
            Ok(result) => result,
            Err(panic) => Err(FetchError::Unexpected(panic_message(panic.as_ref()))),
        };
        let intent = match result {
            Ok(payload) => RenderIntent::Loaded { payload },
            Err(err) => RenderIntent::Failed {
                error: ErrorInfo::from(err),
            },
        };

        RenderReducer::reduce(RenderState::Loading, intent)
    };

    stream::once(future::ready(loading)).chain(stream::once(terminal))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "product fetch panicked".to_string()
    }
}
