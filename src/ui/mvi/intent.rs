//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents describe something that happened (a fetch started, a response
/// arrived) and are fed to a reducer to produce the next state.
pub trait Intent: Send + 'static {}
