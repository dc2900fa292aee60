//! Screen-less mode: one fetch, one line per state.

use std::io::{self, Write};

use crate::client::ProductSource;
use crate::render::RenderState;
use crate::shutdown::ShutdownHandle;
use crate::store::{FetchStart, ProductStore};

/// Run a single fetch, writing each state to `out` as it arrives.
///
/// Returns the last state seen: the terminal state normally, `Loading` if
/// `shutdown` fired first.
pub async fn run_once<S, W>(
    store: &ProductStore<S>,
    shutdown: &ShutdownHandle,
    out: &mut W,
) -> io::Result<RenderState>
where
    S: ProductSource,
    W: Write,
{
    let mut states = store.subscribe();
    if store.start_fetch() == FetchStart::Closed {
        return Ok(store.current());
    }

    let mut last = store.current();
    loop {
        let next = tokio::select! {
            state = states.recv() => state,
            _ = shutdown.wait() => None,
        };
        let Some(state) = next else {
            break;
        };
        writeln!(out, "{}", state)?;
        out.flush()?;
        let done = state.is_terminal();
        last = state;
        if done {
            break;
        }
    }

    store.close();
    Ok(last)
}
