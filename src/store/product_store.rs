use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::future::FutureExt;
use futures_util::stream::{Stream, StreamExt};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::client::ProductSource;
use crate::render::{product_states, RenderIntent, RenderReducer, RenderState};
use crate::ui::mvi::Reducer;
use crate::shutdown::ShutdownHandle;
use crate::store::cell::{StateCell, Subscription};

/// Outcome of [`ProductStore::start_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStart {
    /// A new fetch is running; `Loading` has already been published.
    Started { fetch_id: u64 },
    /// A fetch is still pending. Nothing changed.
    AlreadyInFlight,
    /// The store was closed.
    Closed,
}

/// Holds the product screen's [`RenderState`] and runs fetches into it.
///
/// The cell starts at `Idle`. Only one fetch runs at a time: a request made
/// while one is pending is ignored. Closing the store (explicitly or by
/// dropping it) stops delivery from a pending fetch and ends every
/// subscription.
pub struct ProductStore<S: ProductSource> {
    source: Arc<S>,
    shared: Arc<Shared>,
    fetches: AtomicU64,
}

struct Shared {
    cell: StateCell<RenderState>,
    slot: Mutex<FetchSlot>,
    shutdown: ShutdownHandle,
}

#[derive(Default)]
struct FetchSlot {
    /// Id of the fetch that has not yet delivered its terminal state.
    in_flight: Option<u64>,
    task: Option<JoinHandle<()>>,
}

impl<S: ProductSource> ProductStore<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            shared: Arc::new(Shared {
                cell: StateCell::new(RenderState::Idle),
                slot: Mutex::new(FetchSlot::default()),
                shutdown: ShutdownHandle::new(),
            }),
            fetches: AtomicU64::new(0),
        }
    }

    pub fn current(&self) -> RenderState {
        self.shared.cell.get()
    }

    pub fn subscribe(&self) -> Subscription<RenderState> {
        self.shared.cell.subscribe()
    }

    pub fn is_fetching(&self) -> bool {
        self.shared.slot.lock().in_flight.is_some()
    }

    /// Number of fetches started so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn is_closed(&self) -> bool {
        self.shared.cell.is_closed()
    }

    /// Start a fetch unless one is already pending.
    ///
    /// `Loading` is published before this returns; the request itself runs
    /// on a spawned task, so this must be called inside a tokio runtime.
    pub fn start_fetch(&self) -> FetchStart {
        let mut slot = self.shared.slot.lock();
        if self.shared.shutdown.is_shutting_down() {
            return FetchStart::Closed;
        }
        if let Some(fetch_id) = slot.in_flight {
            tracing::debug!(fetch_id, "Fetch already in flight, ignoring request");
            return FetchStart::AlreadyInFlight;
        }

        let fetch_id = self.fetches.fetch_add(1, Ordering::Relaxed) + 1;
        let mut states = Box::pin(product_states(Arc::clone(&self.source)));

        // The first state is ready without touching the network.
        if let Some(Some(loading)) = states.next().now_or_never() {
            self.shared.cell.publish(loading);
        }
        slot.in_flight = Some(fetch_id);

        let span = tracing::info_span!("product_fetch", fetch_id);
        let task = tokio::spawn(
            drive_fetch(Arc::clone(&self.shared), fetch_id, states).instrument(span),
        );
        slot.task = Some(task);

        tracing::info!(fetch_id, "Fetch started");
        FetchStart::Started { fetch_id }
    }

    /// Return the screen to `Idle`.
    ///
    /// Refused (returns false) while a fetch is pending or once closed, so a
    /// reset never lands between `Loading` and its result.
    pub fn reset(&self) -> bool {
        let slot = self.shared.slot.lock();
        if slot.in_flight.is_some() || self.shared.shutdown.is_shutting_down() {
            return false;
        }
        let state = RenderReducer::reduce(self.shared.cell.get(), RenderIntent::Reset);
        self.shared.cell.publish(state)
    }

    /// Stop delivering results and end all subscriptions.
    ///
    /// A pending request is abandoned; its result is never published.
    pub fn close(&self) {
        // Under the slot lock so no delivery lands between the flag and the cell.
        let task = {
            let mut slot = self.shared.slot.lock();
            if !self.shared.shutdown.signal() {
                return;
            }
            self.shared.cell.close();
            slot.task.take()
        };
        if let Some(task) = task {
            task.abort();
        }
        tracing::debug!("Product store closed");
    }
}

impl<S: ProductSource> Drop for ProductStore<S> {
    fn drop(&mut self) {
        self.close();
    }
}

impl Shared {
    /// Publish `state` for `fetch_id`. Returns false once closed.
    fn deliver(&self, fetch_id: u64, state: RenderState) -> bool {
        let mut slot = self.slot.lock();
        if state.is_terminal() && slot.in_flight == Some(fetch_id) {
            slot.in_flight = None;
            slot.task = None;
        }
        if state.is_terminal() {
            tracing::info!(
                fetch_id,
                state = %state,
                subscribers = self.cell.subscriber_count(),
                "Fetch finished"
            );
        }
        self.cell.publish(state)
    }

    fn release(&self, fetch_id: u64) {
        let mut slot = self.slot.lock();
        if slot.in_flight == Some(fetch_id) {
            slot.in_flight = None;
        }
    }
}

async fn drive_fetch<St>(shared: Arc<Shared>, fetch_id: u64, mut states: St)
where
    St: Stream<Item = RenderState> + Unpin + Send,
{
    // Clears the in-flight marker however the task ends, aborts included.
    let guard = scopeguard::guard(Arc::clone(&shared), move |shared| shared.release(fetch_id));

    loop {
        let next = tokio::select! {
            biased;
            _ = guard.shutdown.wait() => {
                tracing::debug!(fetch_id, "Store closed, dropping fetch result");
                return;
            }
            next = states.next() => next,
        };

        let Some(state) = next else {
            break;
        };
        if !guard.deliver(fetch_id, state) {
            return;
        }
    }
}
