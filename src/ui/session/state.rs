//! State record for the summarizer screen.

use crate::summarizer::{is_blank, SummaryMode};
use crate::ui::mvi::UiState;

/// Progress of the most recent summary request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryStatus {
    /// Nothing summarized since start or the last clear.
    #[default]
    Empty,

    /// Waiting for the job with this generation to finish.
    Pending {
        generation: u64,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// Latest accepted summary.
    Ready { summary: String },
}

/// Everything the screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub input: String,
    /// Derived from `input` on every change.
    pub word_count: usize,
    pub mode: SummaryMode,
    pub status: SummaryStatus,
    /// Generation handed to the next accepted request.
    pub next_generation: u64,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn new(mode: SummaryMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, SummaryStatus::Pending { .. })
    }

    pub fn pending_generation(&self) -> Option<u64> {
        match self.status {
            SummaryStatus::Pending { generation, .. } => Some(generation),
            _ => None,
        }
    }

    /// Current summary, if one is ready.
    pub fn summary(&self) -> Option<&str> {
        match &self.status {
            SummaryStatus::Ready { summary } => Some(summary),
            _ => None,
        }
    }

    /// True when the input is blank and cannot be summarized.
    pub fn input_is_blank(&self) -> bool {
        is_blank(&self.input)
    }

    /// Whether a summarize request would be accepted right now.
    pub fn can_summarize(&self) -> bool {
        !self.is_pending() && !self.input_is_blank()
    }
}
