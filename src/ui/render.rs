use crate::notify::Severity;
use crate::summarizer::SummaryMode;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    bottom_right_rect, layout_regions, split_input_pane, split_panes, wrapped_height,
};
use crate::ui::session::{SessionState, SummaryStatus};
use crate::ui::theme::{
    ACCENT_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SELECTED_BG, STATUS_ERROR, STATUS_OK,
    TOAST_BORDER,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INPUT_PLACEHOLDER: &str = "Paste your academic text here... For example, a research paper abstract, textbook chapter, or lecture notes.";

const TOAST_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let (input_pane, summary_pane) = split_panes(body);
    let (text_area, selector_area) = split_input_pane(input_pane);
    draw_input(frame, text_area, app.session());
    draw_mode_selector(frame, selector_area, app.session().mode);
    draw_summary(frame, summary_pane, app.session());

    frame.render_widget(Footer::new(app.session()).widget(footer), footer);

    draw_toasts(frame, body, app);
}

fn pane_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_input(frame: &mut Frame, area: Rect, session: &SessionState) {
    let badge = Line::from(Span::styled(
        format!(" {} words ", session.word_count),
        Style::default().fg(ACCENT_BLUE),
    ))
    .right_aligned();
    let block = pane_block("Input Text").title(badge);
    let inner = block.inner(area);

    let paragraph = if session.input.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT),
        )))
    } else {
        let mut lines: Vec<Line> = session
            .input
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().fg(ACCENT_BLUE)));
        }
        // Keep the end of the text (where typing happens) in view.
        let height = wrapped_height(&session.input, inner.width.saturating_sub(1));
        let scroll = height.saturating_sub(inner.height);
        Paragraph::new(lines).scroll((scroll, 0))
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}

fn draw_mode_selector(frame: &mut Frame, area: Rect, selected: SummaryMode) {
    let mut spans = vec![Span::raw(" ")];
    for mode in SummaryMode::ALL {
        let style = if mode == selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }

    let widget = Paragraph::new(Line::from(spans)).block(pane_block("Summary Type"));
    frame.render_widget(widget, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, session: &SessionState) {
    let block = pane_block("Summary");

    let paragraph = match &session.status {
        SummaryStatus::Empty => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No summary yet",
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Enter your academic text and press Ctrl+S to get started",
                Style::default().fg(MUTED_TEXT),
            )),
        ])
        .alignment(Alignment::Center),

        SummaryStatus::Pending { animation_tick, .. } => {
            let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            Paragraph::new(vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
                    Span::styled("Analyzing...", Style::default().fg(HEADER_TEXT)),
                ]),
            ])
        }

        SummaryStatus::Ready { summary } => {
            let text_style = Style::default().fg(HEADER_TEXT);
            let mut lines: Vec<Line> = summary
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), text_style)))
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("✓ Summary generated", Style::default().fg(STATUS_OK)),
                Span::styled(" • Ctrl+Y to copy", Style::default().fg(MUTED_TEXT)),
            ]));
            Paragraph::new(lines)
        }
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}

fn draw_toasts(frame: &mut Frame, area: Rect, app: &App) {
    let mut y_offset = 0u16;
    for toast in app.toasts().iter().rev() {
        let color = match toast.severity {
            Severity::Info => TOAST_BORDER,
            Severity::Error => STATUS_ERROR,
        };
        let inner_width = TOAST_WIDTH.saturating_sub(2);
        let height = wrapped_height(&toast.description, inner_width).saturating_add(2);

        // Newest toast sits lowest; older ones stack upwards.
        let remaining = Rect {
            height: area.height.saturating_sub(y_offset),
            ..area
        };
        if remaining.height < 3 {
            break;
        }
        let rect = bottom_right_rect(remaining, TOAST_WIDTH, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", toast.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let widget = Paragraph::new(toast.description.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(widget, rect);

        y_offset = y_offset.saturating_add(rect.height);
    }
}
