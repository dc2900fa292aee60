use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Single-slot holder that always contains the most recent value.
///
/// Every published value replaces the slot and is queued to each live
/// subscriber; subscribers see all values in publish order, not just the
/// latest. Subscribers whose receiving end is gone are pruned on the next
/// publish. Once closed, the cell rejects further publishes and ends every
/// subscription.
pub struct StateCell<T> {
    inner: Mutex<CellInner<T>>,
}

struct CellInner<T> {
    current: T,
    subscribers: Vec<mpsc::UnboundedSender<T>>,
    closed: bool,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(CellInner {
                current: initial,
                subscribers: Vec::new(),
                closed: false,
            }),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.inner.lock().current.clone()
    }

    /// Subscribe to values published from now on.
    ///
    /// The current value is not replayed; read it with [`get`](Self::get).
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        if !inner.closed {
            inner.subscribers.push(tx);
        }
        Subscription { rx }
    }

    /// Replace the current value and notify subscribers.
    ///
    /// Returns false, leaving everything untouched, if the cell is closed.
    pub fn publish(&self, value: T) -> bool {
        let mut inner = self.inner.lock();
        if inner.closed {
            return false;
        }
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(value.clone()).is_ok());
        inner.current = value;
        true
    }

    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.subscribers.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// Receiving end of a [`StateCell`] subscription.
pub struct Subscription<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Next published value. `None` once the cell is closed (or dropped)
    /// and everything already published has been received.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Next value if one is already queued.
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}
