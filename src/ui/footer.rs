use ratatui::{
    style::{Style, Stylize},
    text::{Line as RatatuiLine, Span},
};

use crate::app::{App, Focus};

use super::theme;

fn build_footer_line(
    mode_name: &str,
    color: ratatui::style::Color,
    hints: &[(&str, &str)],
) -> RatatuiLine<'static> {
    let mut spans = vec![Span::styled(
        mode_name.to_string(),
        Style::default().fg(theme::TEXT_ON_ACCENT).bg(color),
    )];
    for (key, desc) in hints {
        spans.push(Span::styled(
            format!("  {key}"),
            Style::default().fg(ratatui::style::Color::Gray),
        ));
        spans.push(Span::styled(format!(" {desc}"), Style::default().dim()));
    }
    RatatuiLine::from(spans)
}

#[must_use]
pub fn render_footer(app: &App) -> RatatuiLine<'static> {
    if app.detail_open() {
        return build_footer_line(
            " DETAIL ",
            theme::DETAIL_PRIMARY,
            &[("n/p", "Step"), ("1-4", "Copy link"), ("Esc", "Close")],
        );
    }
    match app.focus {
        Focus::Tags => build_footer_line(
            " TAGS ",
            theme::TAGS_PRIMARY,
            &[("Space", "Toggle"), ("c", "Clear"), ("Tab", "Projects"), ("?", "Help")],
        ),
        Focus::Projects => build_footer_line(
            " PROJECTS ",
            theme::PROJECTS_PRIMARY,
            &[("Enter", "Open"), ("c", "Clear"), ("Tab", "Tags"), ("?", "Help")],
        ),
    }
}

/// Right-aligned "visible/total" project count.
#[must_use]
pub fn project_count_label(app: &App) -> String {
    format!("{}/{} projects", app.visible_count(), app.catalog().len())
}
