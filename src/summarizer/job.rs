//! Simulated processing delay around the summarizer.
//!
//! The sleep in [`SummaryJob::run`] is the only suspension point between a
//! summary request and its result. Jobs run to completion while the UI is
//! up; the UI loop keeps the returned `JoinHandle` and aborts an unfinished
//! job when it exits.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::engine::summarize;
use super::mode::SummaryMode;

/// Inputs captured at the moment a summary is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryJob {
    /// Request id; completions for an older generation are discarded.
    pub generation: u64,
    pub text: String,
    pub mode: SummaryMode,
}

/// Result of a finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub generation: u64,
    pub summary: String,
}

impl SummaryJob {
    pub fn new(generation: u64, text: impl Into<String>, mode: SummaryMode) -> Self {
        Self {
            generation,
            text: text.into(),
            mode,
        }
    }

    /// Wait `delay`, then compute the summary.
    pub async fn run(self, delay: Duration) -> SummaryOutcome {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let summary = summarize(&self.text, self.mode);
        tracing::debug!(
            generation = self.generation,
            mode = %self.mode,
            chars = summary.len(),
            "Summary job finished"
        );
        SummaryOutcome {
            generation: self.generation,
            summary,
        }
    }
}

/// Run `job` on `runtime` and hand the outcome to `on_done`.
///
/// `on_done` is usually a closure that wraps the outcome into a UI event.
pub fn spawn_job<T, F>(
    runtime: &Handle,
    job: SummaryJob,
    delay: Duration,
    events: Sender<T>,
    on_done: F,
) -> JoinHandle<()>
where
    T: Send + 'static,
    F: FnOnce(SummaryOutcome) -> T + Send + 'static,
{
    tracing::debug!(
        generation = job.generation,
        mode = %job.mode,
        delay_ms = delay.as_millis() as u64,
        "Spawning summary job"
    );
    runtime.spawn(async move {
        let outcome = job.run(delay).await;
        if events.send(on_done(outcome)).is_err() {
            tracing::trace!("Summary outcome dropped (receiver gone)");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn run_waits_for_the_delay() {
        let job = SummaryJob::new(7, "Alpha. Beta.", SummaryMode::Brief);
        let started = tokio::time::Instant::now();
        let outcome = job.run(Duration::from_millis(2000)).await;
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(outcome.generation, 7);
        assert_eq!(outcome.summary, "Brief Summary: Alpha.  Beta.");
    }

    #[test]
    fn aborted_job_never_reports() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        let job = SummaryJob::new(3, "Slow.", SummaryMode::Brief);

        let handle = spawn_job(runtime.handle(), job, Duration::from_secs(3600), tx, |o| o);
        handle.abort();

        // The task's sender is dropped with it, so the channel disconnects.
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected)
        );
    }

    #[tokio::test]
    async fn zero_delay_completes_immediately() {
        let job = SummaryJob::new(1, "Only", SummaryMode::Brief);
        let outcome = job.run(Duration::ZERO).await;
        assert_eq!(outcome.summary, "Brief Summary: Only.");
    }
}
