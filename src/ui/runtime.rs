use crate::clipboard::system_or_memory;
use crate::config::Config;
use crate::summarizer::spawn_job;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Run the interactive summarizer until the user quits.
///
/// `runtime` hosts the delayed summary jobs; the UI loop itself stays on
/// the calling thread.
pub fn run(config: &Config, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let delay = config.delay();
    let mut app = App::new(config, system_or_memory());
    let events = EventHandler::new(tick_rate);
    let mut running_job: Option<JoinHandle<()>> = None;

    tracing::info!(
        mode = %app.session().mode,
        delay_ms = config.defaults.delay_ms,
        "Summarizer started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Summarize(job) = handle_key(&mut app, key) {
                    // Completion always comes back through the event loop.
                    running_job = Some(spawn_job(
                        runtime,
                        job,
                        delay,
                        events.sender(),
                        AppEvent::SummaryReady,
                    ));
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SummaryReady(outcome)) => app.on_summary_ready(outcome),
            Ok(AppEvent::InputClosed) => {
                tracing::warn!("Terminal input closed, quitting");
                app.request_quit();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    if let Some(job) = running_job.take() {
        job.abort();
    }
    tracing::info!("Summarizer exiting");
    drop(guard);
    Ok(())
}
