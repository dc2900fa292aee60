//! Fetch a product string from a remote endpoint and show it on a
//! single terminal screen.
//!
//! The pieces, leaf first:
//! - [`client`]: one HTTP GET per call, body text or a classified error
//! - [`render`]: the `Idle → Loading → Success | Failure` state machine
//! - [`store`]: latest-value cell that runs fetches and notifies subscribers
//! - [`ui`]: maps each state to a visual and drives the terminal

pub mod cli;
pub mod client;
pub mod config;
pub mod headless;
pub mod logging;
pub mod render;
pub mod shutdown;
pub mod store;
pub mod ui;
