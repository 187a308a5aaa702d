use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::summarizer::SummaryOutcome;

/// Everything the UI loop reacts to, in arrival order.
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A summary job finished (possibly stale).
    SummaryReady(SummaryOutcome),
    /// The input thread hit a terminal error and stopped; no more keys will arrive.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

/// Wait up to `timeout` for one terminal event.
fn crossterm_source(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

impl EventHandler {
    /// Start the input thread: terminal events plus a tick every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, crossterm_source)
    }

    /// Like [`EventHandler::new`], reading events from `source` instead of the terminal.
    pub fn with_source<S>(tick_rate: Duration, mut source: S) -> Self
    where
        S: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if thread_stop.load(Ordering::Relaxed) {
                    break;
                }

                // Short poll timeout so the stop flag is checked frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match source(timeout) {
                    Ok(Some(Event::Key(key))) => {
                        let _ = event_tx.send(AppEvent::Key(key));
                    }
                    Ok(Some(Event::Paste(text))) => {
                        let _ = event_tx.send(AppEvent::Paste(text));
                    }
                    Ok(Some(Event::Resize(cols, rows))) => {
                        let _ = event_tx.send(AppEvent::Resize(cols, rows));
                    }
                    Ok(_) => {}
                    Err(err) => {
                        tracing::error!("Terminal input error: {}", err);
                        // The loop holds its own sender, so it never sees a disconnect.
                        let _ = event_tx.send(AppEvent::InputClosed);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    const NO_TICKS: Duration = Duration::from_secs(3600);

    #[test]
    fn source_error_reports_input_closed() {
        let events = EventHandler::with_source(NO_TICKS, |_| Err(io::Error::other("no tty")));

        match events.next(Duration::from_secs(5)) {
            Ok(AppEvent::InputClosed) => {}
            Ok(_) => panic!("Expected InputClosed"),
            Err(err) => panic!("Expected InputClosed, got {:?}", err),
        }
    }

    #[test]
    fn source_events_are_forwarded() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let mut pending = vec![Event::Key(key)];
        let events = EventHandler::with_source(NO_TICKS, move |timeout| {
            let next = pending.pop();
            if next.is_none() {
                thread::sleep(timeout);
            }
            Ok(next)
        });

        match events.next(Duration::from_secs(5)) {
            Ok(AppEvent::Key(key)) => assert_eq!(key.code, KeyCode::Char('a')),
            _ => panic!("Expected the key event"),
        }
    }

    #[test]
    fn ticks_arrive_without_input() {
        let events = EventHandler::with_source(Duration::from_millis(10), |timeout| {
            thread::sleep(timeout);
            Ok(None)
        });

        assert!(matches!(
            events.next(Duration::from_secs(5)),
            Ok(AppEvent::Tick)
        ));
    }
}
