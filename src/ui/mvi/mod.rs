//! Unidirectional state flow for the summarizer screen.
//!
//! Key presses, pastes and finished jobs become intents; a reducer folds
//! each intent into a fresh state record; `render` draws whatever the
//! latest record says. Nothing else mutates the record.
//!
//! Effects (spawning a job, toasts, the clipboard) live in
//! [`crate::ui::app::App`], around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
