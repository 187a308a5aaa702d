use std::time::Instant;

use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::error::validate_input;
use crate::notify::{Toast, ToastQueue};
use crate::summarizer::{SummaryJob, SummaryMode, SummaryOutcome};
use crate::ui::mvi::Reducer;
use crate::ui::session::{SessionIntent, SessionReducer, SessionState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level view model: owns the session record and the collaborators
/// (toasts, clipboard) the page handlers talk to.
pub struct App {
    should_quit: bool,
    session: SessionState,
    toasts: ToastQueue,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(config: &Config, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            should_quit: false,
            session: SessionState::new(config.defaults.mode),
            toasts: ToastQueue::new(config.toast_duration()),
            clipboard,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch(SessionIntent::AnimationTick);
        self.toasts.prune(now);
    }

    // ========================================================================
    // Text input
    // ========================================================================

    /// Replace the whole input text.
    pub fn set_text(&mut self, text: String) {
        self.dispatch(SessionIntent::TextChanged { text });
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut text = self.session.input.clone();
        text.push(ch);
        self.set_text(text);
    }

    pub fn on_paste(&mut self, pasted: &str) {
        let mut text = self.session.input.clone();
        // Terminals deliver CRLF or bare CR inside bracketed paste.
        text.push_str(&pasted.replace("\r\n", "\n").replace('\r', "\n"));
        self.set_text(text);
    }

    pub fn backspace(&mut self) {
        let mut text = self.session.input.clone();
        if text.pop().is_some() {
            self.set_text(text);
        }
    }

    // ========================================================================
    // Mode selector
    // ========================================================================

    pub fn set_mode(&mut self, mode: SummaryMode) {
        self.dispatch(SessionIntent::ModeChanged { mode });
    }

    pub fn cycle_mode(&mut self, forward: bool) {
        self.dispatch(SessionIntent::CycleMode { forward });
    }

    // ========================================================================
    // Summary lifecycle
    // ========================================================================

    /// Start a summary of the current input.
    ///
    /// Blank input shows an error toast and leaves the session untouched.
    /// Returns the job the caller must run, or `None` when nothing started.
    pub fn request_summary(&mut self) -> Option<SummaryJob> {
        if let Err(err) = validate_input(&self.session.input) {
            self.toasts.push(Toast::error(err.to_string(), err.detail()));
            return None;
        }

        if self.session.is_pending() {
            tracing::debug!("Summary already in progress, ignoring request");
            return None;
        }

        self.dispatch(SessionIntent::SummarizeRequested);
        let generation = self.session.pending_generation()?;
        tracing::info!(
            generation,
            mode = %self.session.mode,
            words = self.session.word_count,
            "Summary requested"
        );
        Some(SummaryJob::new(
            generation,
            self.session.input.clone(),
            self.session.mode,
        ))
    }

    /// Apply a finished job. Stale outcomes are dropped silently.
    pub fn on_summary_ready(&mut self, outcome: SummaryOutcome) {
        let generation = outcome.generation;
        let accepted = self.session.pending_generation() == Some(generation);
        self.dispatch(SessionIntent::SummaryCompleted {
            generation,
            summary: outcome.summary,
        });

        if accepted {
            self.toasts.push(Toast::info(
                "Summary generated!",
                "Your academic text has been successfully summarized.",
            ));
        } else {
            tracing::debug!(generation, "Discarded stale summary");
        }
    }

    /// Copy the ready summary to the clipboard. Returns true on success.
    pub fn copy_summary(&mut self) -> bool {
        let Some(summary) = self.session.summary() else {
            return false;
        };

        match self.clipboard.write_text(summary) {
            Ok(()) => {
                self.toasts.push(Toast::info(
                    "Copied to clipboard",
                    "Summary has been copied to your clipboard.",
                ));
                true
            }
            Err(err) => {
                tracing::warn!("Clipboard write failed: {}", err);
                self.toasts.push(Toast::error("Copy failed", err.to_string()));
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.dispatch(SessionIntent::Cleared);
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        dispatch_mvi!(self, session, SessionReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::notify::Severity;

    fn make_app() -> (App, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let app = App::new(&Config::default(), Box::new(clipboard.clone()));
        (app, clipboard)
    }

    #[test]
    fn typing_updates_word_count() {
        let (mut app, _) = make_app();
        for ch in "hi there".chars() {
            app.insert_char(ch);
        }
        assert_eq!(app.session().input, "hi there");
        assert_eq!(app.session().word_count, 2);

        app.backspace();
        assert_eq!(app.session().input, "hi ther");
    }

    #[test]
    fn backspace_on_empty_input_is_noop() {
        let (mut app, _) = make_app();
        app.backspace();
        assert_eq!(app.session(), &SessionState::default());
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let (mut app, _) = make_app();
        app.on_paste("a\r\nb\rc");
        assert_eq!(app.session().input, "a\nb\nc");
        assert_eq!(app.session().word_count, 3);
    }

    #[test]
    fn blank_request_toasts_and_starts_nothing() {
        let (mut app, _) = make_app();
        app.set_text("   ".into());
        let before = app.session().clone();

        assert!(app.request_summary().is_none());

        assert_eq!(app.session(), &before);
        let toast = app.toasts().latest().unwrap();
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.title, "No text to summarize");
    }

    #[test]
    fn copy_without_summary_does_nothing() {
        let (mut app, clipboard) = make_app();
        assert!(!app.copy_summary());
        assert_eq!(clipboard.writes(), 0);
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn on_tick_advances_spinner() {
        let (mut app, _) = make_app();
        app.set_text("A.".into());
        app.request_summary().unwrap();
        app.on_tick(Instant::now());
        assert!(matches!(
            app.session().status,
            crate::ui::session::SummaryStatus::Pending {
                animation_tick: 1,
                ..
            }
        ));
    }
}
