use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::summarizer::SummaryJob;
use crate::ui::app::App;

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Run this summary job in the background.
    Summarize(SummaryJob),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }
    if is_ctrl_char(key, 's') {
        return match app.request_summary() {
            Some(job) => InputAction::Summarize(job),
            None => InputAction::None,
        };
    }
    if is_ctrl_char(key, 'y') {
        app.copy_summary();
        return InputAction::None;
    }
    if is_ctrl_char(key, 'l') {
        app.clear();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab => app.cycle_mode(true),
        KeyCode::BackTab => app.cycle_mode(false),
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(ch)
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
