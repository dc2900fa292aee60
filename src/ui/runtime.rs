use crossterm::event::EventStream;
use futures_util::stream::StreamExt;
use std::io;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::client::ProductSource;
use crate::shutdown::ShutdownHandle;
use crate::store::{FetchStart, ProductStore};
use crate::ui::app::App;
use crate::ui::events::AppEvent;
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Settings for the interactive screen.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub endpoint: String,
    pub tick_rate: Duration,
    pub show_version: bool,
    /// Start a fetch as soon as the screen is up.
    pub autofetch: bool,
}

/// Run the product screen until the user quits or `shutdown` fires.
///
/// The store is closed before the terminal is restored, so a fetch still in
/// flight never delivers into a torn-down screen.
pub async fn run<S: ProductSource>(
    store: &ProductStore<S>,
    options: RunOptions,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(options.endpoint, options.show_version);
    let mut states = store.subscribe();
    app.on_state(store.current());

    let mut input = EventStream::new();
    let mut ticker = tokio::time::interval(options.tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    if options.autofetch {
        start_fetch(store);
    }

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        let event = tokio::select! {
            state = states.recv() => match state {
                Some(state) => AppEvent::State(state),
                None => AppEvent::StoreClosed,
            },
            input_event = input.next() => match input_event {
                Some(Ok(event)) => match AppEvent::from_terminal(event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(err)) => break Err(err),
                None => AppEvent::InputClosed,
            },
            _ = ticker.tick() => AppEvent::Tick,
            _ = shutdown.wait() => AppEvent::Shutdown,
        };

        match event {
            AppEvent::Key(key) => match handle_key(&mut app, key) {
                InputAction::Fetch => start_fetch(store),
                InputAction::Clear => {
                    if !store.reset() {
                        tracing::debug!("Clear ignored while a fetch is pending");
                    }
                }
                InputAction::None => {}
            },
            AppEvent::State(state) => app.on_state(state),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(cols, rows) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            AppEvent::StoreClosed | AppEvent::Shutdown | AppEvent::InputClosed => {
                app.request_quit();
            }
        }
    };

    store.close();
    drop(guard);
    result
}

fn start_fetch<S: ProductSource>(store: &ProductStore<S>) {
    match store.start_fetch() {
        FetchStart::Started { .. } => {}
        FetchStart::AlreadyInFlight => tracing::debug!("Fetch requested while one is pending"),
        FetchStart::Closed => tracing::warn!("Fetch requested after store closed"),
    }
}
