//! Terminal front end for the product screen.
//!
//! [`screen`] maps each render state to exactly one visual; everything else
//! here is terminal plumbing around it.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, RunOptions};
