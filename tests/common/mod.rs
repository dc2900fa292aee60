//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use parking_lot::Mutex;
use product_view::client::{FetchError, ProductClient, ProductSource};
use product_view::config::EndpointConfig;
use product_view::render::RenderState;
use product_view::store::Subscription;
use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Find an available port for testing. Nothing listens on it afterwards.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// HTTP client pointed at `url` with short timeouts.
pub fn client_for(url: &str) -> ProductClient {
    let endpoint = EndpointConfig {
        url: url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    ProductClient::new(&endpoint).expect("Failed to build client")
}

// -- Scripted sources ---------------------------------------------------------

/// One scripted answer from [`ScriptedSource`].
#[derive(Debug, Clone)]
pub enum Step {
    Product(&'static str),
    Http(u16, &'static str),
    Reset,
    Panic(&'static str),
}

/// In-memory product source answering from a script.
///
/// With a gate, every fetch waits for one permit before answering, so tests
/// can hold a fetch in flight.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            script: Mutex::new(steps.into_iter().collect()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Same as `new`, but fetches block until `gate` hands out a permit.
    pub fn gated(steps: impl IntoIterator<Item = Step>, gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(steps)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProductSource for ScriptedSource {
    fn fetch_product(&self) -> impl Future<Output = Result<String, FetchError>> + Send {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.acquire().await.expect("gate closed").forget();
            }
            let step = self.script.lock().pop_front().unwrap_or(Step::Product(""));
            match step {
                Step::Product(body) => Ok(body.to_string()),
                Step::Http(status, body) => Err(FetchError::Http {
                    status,
                    body: body.to_string(),
                }),
                Step::Reset => Err(FetchError::network(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                ))),
                Step::Panic(message) => panic!("{}", message),
            }
        }
    }
}

/// Source that panics while the fetch is being set up, before any future
/// exists.
pub struct ExplodingSource;

impl ProductSource for ExplodingSource {
    fn fetch_product(&self) -> impl Future<Output = Result<String, FetchError>> + Send {
        let armed = true;
        if armed {
            panic!("source exploded during setup");
        }
        std::future::ready(Ok(String::new()))
    }
}

// -- Subscription helpers -----------------------------------------------------

/// Receive states until a terminal one arrives (inclusive).
pub async fn collect_until_terminal(sub: &mut Subscription<RenderState>) -> Vec<RenderState> {
    let mut seen = Vec::new();
    loop {
        let state = tokio::time::timeout(Duration::from_secs(5), sub.recv())
            .await
            .expect("timed out waiting for state")
            .expect("subscription ended early");
        let done = state.is_terminal();
        seen.push(state);
        if done {
            return seen;
        }
    }
}

pub fn success(payload: &str) -> RenderState {
    RenderState::Success {
        payload: payload.to_string(),
    }
}
