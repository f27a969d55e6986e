use ratatui::{
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
};

use crate::app::{App, Focus};
use crate::catalog::Project;

use super::shared::wrap_text;
use super::theme;

/// Rendered project list plus the first line of each project, for scrolling.
pub struct ProjectList {
    pub lines: Vec<RatatuiLine<'static>>,
    pub starts: Vec<usize>,
}

impl ProjectList {
    #[must_use]
    pub fn into_lines(self) -> Vec<RatatuiLine<'static>> {
        self.lines
    }

    /// Line the cursor project begins on.
    #[must_use]
    pub fn cursor_line(&self, cursor: usize) -> usize {
        self.starts.get(cursor).copied().unwrap_or(0)
    }
}

fn project_rows(
    app: &App,
    project: &Project,
    is_cursor: bool,
    width: usize,
) -> Vec<RatatuiLine<'static>> {
    let indent = " ".repeat(theme::LIST_INDENT);
    let text_width = width.saturating_sub(theme::LIST_INDENT);
    let mut rows = Vec::new();

    let (prefix, name_style) = if is_cursor {
        (
            format!("{} ", theme::GLYPH_CURSOR),
            Style::default()
                .fg(theme::PROJECTS_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (indent.clone(), Style::default().add_modifier(Modifier::BOLD))
    };
    rows.push(RatatuiLine::from(vec![
        Span::styled(prefix, Style::default().fg(theme::PROJECTS_PRIMARY)),
        Span::styled(project.name.clone(), name_style),
    ]));

    if !project.description.is_empty() {
        for line in wrap_text(&project.description, text_width) {
            rows.push(RatatuiLine::from(vec![
                Span::raw(indent.clone()),
                Span::styled(line, Style::default().fg(theme::TEXT_MUTED)),
            ]));
        }
    }

    if !project.tags.is_empty() {
        let mut spans = vec![Span::raw(indent.clone())];
        for (i, tag) in project.tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let mut style = Style::default().fg(theme::TAG);
            if app.selected_tags().contains(tag) {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("#{tag}"), style));
        }
        rows.push(RatatuiLine::from(spans));
    }

    rows
}

#[must_use]
pub fn build_project_list(app: &App, width: usize) -> ProjectList {
    let visible = app.visible_projects();

    if visible.is_empty() {
        let msg = if app.catalog().is_empty() {
            theme::MSG_EMPTY_CATALOG
        } else {
            theme::MSG_NO_MATCHES
        };
        return ProjectList {
            lines: vec![RatatuiLine::from(Span::styled(
                msg,
                Style::default().fg(theme::TEXT_MUTED),
            ))],
            starts: Vec::new(),
        };
    }

    let projects_focused = app.focus == Focus::Projects;
    let mut lines = Vec::new();
    let mut starts = Vec::with_capacity(visible.len());

    for (idx, project) in visible.iter().enumerate() {
        if idx > 0 {
            lines.push(RatatuiLine::raw(""));
        }
        starts.push(lines.len());
        let is_cursor = projects_focused && idx == app.project_cursor;
        lines.extend(project_rows(app, project, is_cursor, width));
    }

    ProjectList { lines, starts }
}
