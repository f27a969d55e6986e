use ratatui::{
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

use super::theme;

const CHIP_GAP: &str = " ";

fn chip_style(selected: bool, under_cursor: bool) -> Style {
    let base = if selected {
        Style::default()
            .fg(theme::TEXT_ON_ACCENT)
            .bg(theme::TAG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TAG)
    };
    if under_cursor {
        base.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED)
    } else {
        base
    }
}

/// Tag bar split into a fixed header, the wrapped chip rows and a fixed summary.
/// Only the chip rows scroll.
pub struct TagBar {
    pub header: RatatuiLine<'static>,
    pub rows: Vec<RatatuiLine<'static>>,
    /// Chip row holding the tag under the cursor.
    pub cursor_row: usize,
    pub summary: Option<RatatuiLine<'static>>,
}

impl TagBar {
    /// Header and summary lines, which are never scrolled away.
    #[must_use]
    pub fn pinned_height(&self) -> usize {
        1 + usize::from(self.summary.is_some())
    }

    /// Header, the chip rows in `[offset, offset + visible)` and the summary.
    #[must_use]
    pub fn window(&self, offset: usize, visible: usize) -> Vec<RatatuiLine<'static>> {
        let mut lines = vec![self.header.clone()];
        lines.extend(self.rows.iter().skip(offset).take(visible).cloned());
        lines.extend(self.summary.clone());
        lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<RatatuiLine<'static>> {
        let mut lines = vec![self.header];
        lines.extend(self.rows);
        lines.extend(self.summary);
        lines
    }
}

/// Header, wrapped tag chips in vocabulary order, and the active-filter summary.
#[must_use]
pub fn build_tag_bar(app: &App, width: usize) -> TagBar {
    let selected_count = app.selected_tags().len();
    let mut header = vec![Span::styled(
        theme::LABEL_FILTER_HEADER,
        Style::default().fg(theme::TEXT_MUTED),
    )];
    if selected_count > 0 {
        header.push(Span::styled(
            format!(" ({selected_count} selected)"),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }
    let header = RatatuiLine::from(header);

    if app.vocabulary().is_empty() {
        return TagBar {
            header,
            rows: vec![RatatuiLine::from(Span::styled(
                theme::MSG_NO_TAGS,
                Style::default().fg(theme::TEXT_MUTED),
            ))],
            cursor_row: 0,
            summary: None,
        };
    }

    let tags_focused = app.focus == Focus::Tags;
    let mut rows = Vec::new();
    let mut cursor_row = 0;
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;

    for (idx, tag) in app.vocabulary().iter().enumerate() {
        let chip = format!(" {tag} ");
        let chip_width = chip.width();
        let gap_width = if row.is_empty() { 0 } else { CHIP_GAP.width() };

        if !row.is_empty() && row_width + gap_width + chip_width > width {
            rows.push(RatatuiLine::from(std::mem::take(&mut row)));
            row_width = 0;
        }
        if idx == app.tag_cursor {
            cursor_row = rows.len();
        }
        if !row.is_empty() {
            row.push(Span::raw(CHIP_GAP));
            row_width += CHIP_GAP.width();
        }

        let style = chip_style(
            app.selected_tags().contains(tag),
            tags_focused && idx == app.tag_cursor,
        );
        row.push(Span::styled(chip, style));
        row_width += chip_width;
    }
    if !row.is_empty() {
        rows.push(RatatuiLine::from(row));
    }

    let summary = app.filter_active().then(|| {
        RatatuiLine::from(vec![
            Span::styled(
                theme::LABEL_FILTERED_BY,
                Style::default().fg(theme::TEXT_MUTED),
            ),
            Span::styled(
                app.selected_tags().summary(),
                Style::default().fg(theme::TAG),
            ),
            Span::styled(
                theme::LABEL_CLEAR_HINT,
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ])
    });

    TagBar {
        header,
        rows,
        cursor_row,
        summary,
    }
}
