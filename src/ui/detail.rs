use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::catalog::Project;

use super::scroll::scroll_arrows;
use super::shared::wrap_text;
use super::theme;

fn heading(title: &str) -> RatatuiLine<'static> {
    RatatuiLine::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme::SECTION_HEADING)
            .add_modifier(Modifier::BOLD),
    ))
}

fn paragraph(text: &str, width: usize, style: Style) -> Vec<RatatuiLine<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| RatatuiLine::from(Span::styled(line, style)))
        .collect()
}

/// Full detail payload for one project. Empty sections are left out.
#[must_use]
pub fn build_detail_lines(project: &Project, width: usize) -> Vec<RatatuiLine<'static>> {
    let details = &project.details;
    let mut lines = Vec::new();

    if !project.description.is_empty() {
        lines.extend(paragraph(
            &project.description,
            width,
            Style::default().fg(theme::TEXT_MUTED),
        ));
        lines.push(RatatuiLine::raw(""));
    }

    if !details.overview.is_empty() {
        lines.push(heading("Overview"));
        lines.extend(paragraph(&details.overview, width, Style::default()));
        lines.push(RatatuiLine::raw(""));
    }

    if !details.technologies.is_empty() {
        lines.push(heading("Technologies"));
        lines.extend(paragraph(
            &details.technologies.join(" · "),
            width,
            Style::default(),
        ));
        lines.push(RatatuiLine::raw(""));
    }

    if !details.achievements.is_empty() {
        lines.push(heading("Key Achievements"));
        let bullet = format!("{} ", theme::GLYPH_BULLET);
        let text_width = width.saturating_sub(2);
        for achievement in &details.achievements {
            for (i, line) in wrap_text(achievement, text_width).into_iter().enumerate() {
                let lead = if i == 0 { bullet.clone() } else { "  ".to_string() };
                lines.push(RatatuiLine::from(vec![
                    Span::styled(lead, Style::default().fg(theme::SECTION_HEADING)),
                    Span::raw(line),
                ]));
            }
        }
        lines.push(RatatuiLine::raw(""));
    }

    if !details.links.is_empty() {
        lines.push(heading("Links"));
        for (i, (kind, uri)) in details.links.present().enumerate() {
            lines.push(RatatuiLine::from(vec![
                Span::styled(
                    format!("[{}] ", i + 1),
                    Style::default().fg(theme::SECTION_HEADING),
                ),
                Span::styled(format!("{:<11}", kind.label()), Style::default()),
                Span::styled(uri.to_string(), Style::default().fg(theme::LINK)),
            ]));
        }
    }

    while lines.last().is_some_and(|l| l.width() == 0) {
        lines.pop();
    }

    lines
}

/// Renders the detail overlay and returns the clamped scroll offset.
pub fn render_detail_modal(f: &mut Frame<'_>, project: &Project, scroll: usize, area: Rect) -> usize {
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", project.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::DETAIL_PRIMARY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let content_area = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(1),
        ..inner
    };

    let lines = build_detail_lines(project, content_area.width as usize);
    let visible_height = content_area.height as usize;
    let scroll = scroll.min(lines.len().saturating_sub(visible_height));
    let total = lines.len();

    #[allow(clippy::cast_possible_truncation)]
    let content = Paragraph::new(lines).scroll((scroll as u16, 0));
    f.render_widget(content, content_area);

    let footer_area = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };
    let mut footer = vec![];
    let arrows = scroll_arrows(scroll, total, visible_height);
    if !arrows.is_empty() {
        footer.push(Span::styled(arrows, Style::default().fg(theme::BORDER_DEFAULT)));
        footer.push(Span::styled(" scroll  ", Style::default().fg(theme::TEXT_MUTED)));
    }
    footer.extend([
        Span::styled("n/p", Style::default().fg(theme::BORDER_DEFAULT)),
        Span::styled(" next/prev  ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("1-4", Style::default().fg(theme::BORDER_DEFAULT)),
        Span::styled(" copy link  ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("Esc", Style::default().fg(theme::BORDER_DEFAULT)),
        Span::styled(" close ", Style::default().fg(theme::TEXT_MUTED)),
    ]);
    f.render_widget(
        Paragraph::new(RatatuiLine::from(footer)).alignment(Alignment::Right),
        footer_area,
    );

    scroll
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn text(lines: &[RatatuiLine<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn detail_lists_sections_and_numbered_links() {
        let catalog = Catalog::builtin().unwrap();
        let lines = text(&build_detail_lines(&catalog.projects()[0], 200));

        assert!(lines.iter().any(|l| l == "Overview"));
        assert!(lines.iter().any(|l| l.contains("BERT · PyTorch")));
        assert!(lines.iter().any(|l| l.contains("EMNLP 2025 Main")));
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("[1] GitHub") && l.ends_with("https://github.com/gihuncho/crepe"))
        );
    }

    #[test]
    fn detail_omits_links_section_when_none() {
        let catalog = Catalog::builtin().unwrap();
        let lines = text(&build_detail_lines(&catalog.projects()[2], 200));
        assert!(!lines.iter().any(|l| l == "Links"));
        assert!(lines.last().is_some_and(|l| !l.is_empty()));
    }

    #[test]
    fn detail_omits_empty_achievements() {
        let catalog = Catalog::parse(
            "[[project]]\nid = \"a\"\nname = \"A\"\n\n[project.details]\noverview = \"Short.\"\n",
        )
        .unwrap();
        let lines = text(&build_detail_lines(&catalog.projects()[0], 80));
        assert_eq!(lines, vec!["Overview", "Short."]);
    }
}
