//! Marker trait for intents.

/// Something that happened: a user edit or a completed background job.
///
/// Intents carry data only; reducers decide what they mean.
pub trait Intent: Send + 'static {}
