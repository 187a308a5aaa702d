//! Reducer for the summarizer screen.

use crate::summarizer::word_count;
use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{SessionState, SummaryStatus};

/// Pure state transitions; spawning the job and showing toasts happen
/// in [`crate::ui::app::App`].
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::TextChanged { text } => SessionState {
                word_count: word_count(&text),
                input: text,
                ..state
            },

            SessionIntent::ModeChanged { mode } => SessionState { mode, ..state },

            SessionIntent::CycleMode { forward } => {
                let mode = if forward {
                    state.mode.next()
                } else {
                    state.mode.prev()
                };
                SessionState { mode, ..state }
            }

            SessionIntent::SummarizeRequested => {
                if !state.can_summarize() {
                    return state;
                }
                let generation = state.next_generation;
                SessionState {
                    status: SummaryStatus::Pending {
                        generation,
                        animation_tick: 0,
                    },
                    next_generation: generation.wrapping_add(1),
                    ..state
                }
            }

            SessionIntent::SummaryCompleted {
                generation,
                summary,
            } => {
                if state.pending_generation() != Some(generation) {
                    // Stale: cleared or superseded since the job started.
                    return state;
                }
                SessionState {
                    status: SummaryStatus::Ready { summary },
                    ..state
                }
            }

            SessionIntent::AnimationTick => match state.status {
                SummaryStatus::Pending {
                    generation,
                    animation_tick,
                } => SessionState {
                    status: SummaryStatus::Pending {
                        generation,
                        animation_tick: animation_tick.wrapping_add(1),
                    },
                    ..state
                },
                _ => state,
            },

            SessionIntent::Cleared => SessionState {
                input: String::new(),
                word_count: 0,
                status: SummaryStatus::Empty,
                ..state
            },
        }
    }
}
