mod common;

use std::sync::mpsc;
use std::time::Duration;

use study_summarizer::config::Config;
use study_summarizer::notify::Severity;
use study_summarizer::summarizer::{spawn_job, summarize, SummaryMode, SummaryOutcome};
use study_summarizer::ui::session::SummaryStatus;

use common::{make_app, make_app_with};

const TEXT: &str = "Cats are mammals. Dogs are mammals too. Birds are not.";

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("Failed to build runtime")
}

#[test]
fn test_request_job_and_copy() {
    let (mut app, clipboard) = make_app();
    let rt = runtime();
    let (tx, rx) = mpsc::channel::<SummaryOutcome>();

    app.set_text(TEXT.to_string());
    app.set_mode(SummaryMode::Detailed);
    let job = app.request_summary().expect("Job should start");
    assert!(app.session().is_pending());
    assert_eq!(job.mode, SummaryMode::Detailed);

    let _handle = spawn_job(rt.handle(), job, Duration::from_millis(10), tx, |o| o);
    let outcome = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("Job should finish");
    app.on_summary_ready(outcome);

    let expected = summarize(TEXT, SummaryMode::Detailed);
    assert_eq!(app.session().summary(), Some(expected.as_str()));
    let toast = app.toasts().latest().unwrap();
    assert_eq!(toast.title, "Summary generated!");
    assert_eq!(toast.severity, Severity::Info);

    assert!(app.copy_summary());
    assert_eq!(clipboard.contents(), Some(expected));
    assert_eq!(app.toasts().latest().unwrap().title, "Copied to clipboard");
}

#[test]
fn test_request_while_pending_starts_nothing() {
    let (mut app, _) = make_app();
    app.set_text(TEXT.to_string());

    assert!(app.request_summary().is_some());
    assert!(app.request_summary().is_none());
    assert_eq!(app.session().pending_generation(), Some(0));
    assert!(app.toasts().is_empty());
}

#[test]
fn test_clear_during_pending_discards_result() {
    let (mut app, _) = make_app();
    let rt = runtime();
    let (tx, rx) = mpsc::channel::<SummaryOutcome>();

    app.set_text(TEXT.to_string());
    let job = app.request_summary().unwrap();
    app.clear();

    let _handle = spawn_job(rt.handle(), job, Duration::ZERO, tx, |o| o);
    let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    app.on_summary_ready(outcome);

    assert_eq!(app.session().status, SummaryStatus::Empty);
    assert!(app.session().input.is_empty());
    assert!(app.toasts().is_empty());
}

#[test]
fn test_job_uses_text_captured_at_request() {
    let (mut app, _) = make_app();
    app.set_text("First. Second.".to_string());
    let job = app.request_summary().unwrap();

    app.set_text("Changed while waiting.".to_string());
    let outcome = runtime().block_on(job.run(Duration::ZERO));
    app.on_summary_ready(outcome);

    assert_eq!(
        app.session().summary(),
        Some("Brief Summary: First.  Second.")
    );
}

#[test]
fn test_configured_default_mode_is_used() {
    let mut config = Config::default();
    config.defaults.mode = SummaryMode::KeyPoints;
    let (mut app, _) = make_app_with(&config);

    app.set_text("Only one sentence here".to_string());
    let job = app.request_summary().unwrap();
    assert_eq!(job.mode, SummaryMode::KeyPoints);
}

#[test]
fn test_toasts_expire_after_configured_duration() {
    let mut config = Config::default();
    config.ui.toast_duration_ms = 50;
    let (mut app, _) = make_app_with(&config);

    assert!(app.request_summary().is_none());
    assert_eq!(app.toasts().len(), 1);

    let later = app.toasts().latest().unwrap().created_at + Duration::from_millis(60);
    app.on_tick(later);
    assert!(app.toasts().is_empty());
}
