use crossterm::event::{Event, KeyEvent};

use crate::render::RenderState;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// New value from the product store.
    State(RenderState),
    /// The store closed its subscription.
    StoreClosed,
    /// OS signal received (SIGTERM, SIGINT).
    Shutdown,
    /// Terminal input ended.
    InputClosed,
}

impl AppEvent {
    /// Translate a terminal event. Events the screen ignores map to `None`.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}
