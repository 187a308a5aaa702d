//! Clipboard access for copying the generated summary.

use std::sync::Arc;

use arboard::Clipboard;
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for ClipboardHandler {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-process clipboard. Used when no system clipboard is reachable
/// (headless sessions) and in tests; clones share the same history.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently written text.
    pub fn contents(&self) -> Option<String> {
        self.history.lock().last().cloned()
    }

    pub fn writes(&self) -> usize {
        self.history.lock().len()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.lock().push(text.to_string());
        Ok(())
    }
}

/// System clipboard if available, otherwise an in-process one.
pub fn system_or_memory() -> Box<dyn ClipboardSink> {
    match ClipboardHandler::new() {
        Ok(handler) => Box::new(handler),
        Err(err) => {
            tracing::warn!("Falling back to in-process clipboard: {}", err);
            Box::new(MemoryClipboard::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_clones_share_history() {
        let observer = MemoryClipboard::new();
        let mut sink = observer.clone();
        sink.write_text("first").unwrap();
        sink.write_text("second").unwrap();
        assert_eq!(observer.contents().as_deref(), Some("second"));
        assert_eq!(observer.writes(), 2);
    }
}
