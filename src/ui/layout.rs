use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Input pane on the left, summary pane on the right.
pub fn split_panes(body: Rect) -> (Rect, Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);
    (panes[0], panes[1])
}

/// Text area above a three-row mode selector.
pub fn split_input_pane(pane: Rect) -> (Rect, Rect) {
    let selector_height = 3.min(pane.height);
    let text = Rect {
        height: pane.height.saturating_sub(selector_height),
        ..pane
    };
    let selector = Rect {
        y: pane.y + text.height,
        height: selector_height,
        ..pane
    };
    (text, selector)
}

/// Rect of `width` x `height` anchored to the bottom-right corner of `area`.
pub fn bottom_right_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

/// Number of rows `text` occupies when wrapped at `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
