//! Intents for the summarizer screen.

use crate::summarizer::SummaryMode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    /// The input surface reported new text.
    TextChanged { text: String },

    /// A specific mode was picked.
    ModeChanged { mode: SummaryMode },

    /// Step through the mode selector.
    CycleMode { forward: bool },

    /// User asked for a summary. Ignored when blank or already pending;
    /// callers run the validation guard first to report blank input.
    SummarizeRequested,

    /// A summary job finished.
    SummaryCompleted { generation: u64, summary: String },

    /// Spinner tick.
    AnimationTick,

    /// Reset input and summary.
    Cleared,
}

impl Intent for SessionIntent {}
