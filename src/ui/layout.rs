use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Chip rows the tag bar may show: at most half the content height minus the pinned
/// header and summary, and never fewer than one.
#[must_use]
pub fn tag_rows_visible(content_height: usize, pinned: usize, rows: usize) -> usize {
    let budget = (content_height / 2).saturating_sub(pinned).max(1);
    rows.min(budget)
}

/// Splits the content area into the tag bar on top and the project list below.
#[must_use]
pub fn split_tag_bar(content_area: Rect, tag_bar_height: usize) -> (Rect, Rect) {
    #[allow(clippy::cast_possible_truncation)]
    let height = (tag_bar_height as u16).min(content_area.height.saturating_sub(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(height),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(content_area);
    (chunks[0], chunks[2])
}
