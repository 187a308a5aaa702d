//! Marker trait for UI state records.

/// Owned by the top-level view and replaced wholesale by the reducer.
///
/// `Default` lets the dispatcher `mem::take` the current value;
/// `PartialEq` lets tests compare whole records.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
