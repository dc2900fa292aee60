//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are immutable values: a transition builds a new one. `PartialEq`
/// lets consumers skip redraws for repeated values.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
