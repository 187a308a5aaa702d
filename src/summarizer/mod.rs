//! Mock summarization core.
//!
//! Pure text transformation (`engine`), word counting (`words`), the
//! selectable output style (`mode`) and the delayed job wrapper (`job`).

mod engine;
pub mod job;
mod mode;
mod words;

pub use engine::{
    split_sentences, summarize, CONCLUSION, KEY_INSIGHTS, KEY_POINTS_CLOSING,
    KEY_POINT_FALLBACKS,
};
pub use job::{spawn_job, SummaryJob, SummaryOutcome};
pub use mode::{ParseModeError, SummaryMode};
pub use words::{is_blank, is_text_whitespace, word_count};
