//! One-shot stop signal shared between an owner and its background tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Lightweight handle for signalling and observing a stop request.
///
/// Clones share the same flag. Signalling is idempotent; every waiter is
/// released, including ones that start waiting after the signal.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Returns true for the call that actually flipped the flag.
    pub fn signal(&self) -> bool {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
            return true;
        }
        false
    }

    pub async fn wait(&self) {
        // Register with Notify before checking the flag: a signal landing
        // between the check and the await would otherwise be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

/// Signal `handle` on Ctrl+C, or SIGTERM on Unix.
pub fn signal_on_os_interrupt(handle: ShutdownHandle) {
    tokio::spawn(async move {
        wait_for_os_interrupt().await;
        if handle.signal() {
            tracing::info!("Interrupt received, shutting down");
        }
    });
}

#[cfg(unix)]
async fn wait_for_os_interrupt() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_os_interrupt() {
    let _ = tokio::signal::ctrl_c().await;
}
