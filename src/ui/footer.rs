use crate::ui::session::SessionState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One key binding shown in the footer.
struct Hint {
    keys: &'static str,
    action: &'static str,
}

const fn hint(keys: &'static str, action: &'static str) -> Hint {
    Hint { keys, action }
}

/// Key hints for the current session; copy only appears once a summary exists.
fn hints_for(session: &SessionState) -> Vec<Hint> {
    let mut hints = Vec::with_capacity(5);
    if !session.is_pending() {
        hints.push(hint("Ctrl+S", "Summarize"));
    }
    hints.push(hint("Tab", "Mode"));
    if session.summary().is_some() {
        hints.push(hint("Ctrl+Y", "Copy"));
    }
    hints.push(hint("Ctrl+L", "Clear"));
    hints.push(hint("Ctrl+Q", "Quit"));
    hints
}

pub struct Footer<'a> {
    session: &'a SessionState,
}

impl<'a> Footer<'a> {
    pub fn new(session: &'a SessionState) -> Self {
        Self { session }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(MUTED_TEXT);

        let mut spans = Vec::new();
        let mut used = 0usize;
        for (i, Hint { keys, action }) in hints_for(self.session).into_iter().enumerate() {
            let sep = if i == 0 { " " } else { " │ " };
            used += sep.chars().count() + keys.chars().count() + 2 + action.chars().count();
            spans.push(Span::styled(sep, text_style));
            spans.push(Span::styled(keys, key_style));
            spans.push(Span::styled(format!(": {action}"), text_style));
        }

        let status = format!("{} · v{} ", self.session.mode.label(), VERSION);
        // Padding is measured in chars; the separators are multi-byte.
        let content_width = usize::from(area.width.saturating_sub(2));
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(status.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(status, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
