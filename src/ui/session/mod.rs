//! Summarizer screen state (MVI).
//!
//! - `state.rs` - input, word count, mode and summary status
//! - `intent.rs` - edits, mode changes, requests and job completions
//! - `reducer.rs` - pure transitions

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{SessionState, SummaryStatus};
