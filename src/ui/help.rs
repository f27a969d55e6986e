use std::sync::LazyLock;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::scroll::scroll_arrows;
use super::theme;

const KEY_WIDTH: usize = 12;
const GUTTER_WIDTH: usize = 2;

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "[Anywhere]",
        &[
            ("Tab", "Switch focus between tags and projects"),
            ("c", "Clear all selected tags"),
            ("1-9", "Toggle a favorite tag"),
            ("g/G", "Jump to first/last"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
        ],
    ),
    (
        "[Tags]",
        &[
            ("h/l", "Previous/next tag"),
            ("Space/Enter", "Toggle tag"),
            ("Esc", "Clear all selected tags"),
        ],
    ),
    (
        "[Projects]",
        &[
            ("j/k", "Next/previous project"),
            ("Enter", "Open project details"),
        ],
    ),
    (
        "[Details]",
        &[
            ("n/p", "Next/previous visible project"),
            ("j/k", "Scroll"),
            ("1-4", "Copy numbered link"),
            ("Esc/q", "Close"),
        ],
    ),
];

static HELP_LINES: LazyLock<Vec<RatatuiLine<'static>>> = LazyLock::new(build_help_lines);

fn build_help_lines() -> Vec<RatatuiLine<'static>> {
    let header_style = Style::default().fg(Color::Cyan);
    let key_style = Style::default().fg(Color::Yellow);
    let desc_style = Style::default().fg(Color::White);
    let header_indent = " ".repeat(KEY_WIDTH + GUTTER_WIDTH);

    let mut lines = Vec::new();
    for (i, (title, keys)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(RatatuiLine::from(""));
        }
        lines.push(RatatuiLine::from(Span::styled(
            format!("{header_indent}{title}"),
            header_style,
        )));
        for (key, desc) in *keys {
            lines.push(help_line(key, desc, key_style, desc_style));
        }
    }
    lines
}

fn help_line(key: &str, desc: &str, key_style: Style, desc_style: Style) -> RatatuiLine<'static> {
    RatatuiLine::from(vec![
        Span::styled(
            format!(
                "{:>width$}{}",
                key,
                " ".repeat(GUTTER_WIDTH),
                width = KEY_WIDTH
            ),
            key_style,
        ),
        Span::styled(desc.to_string(), desc_style),
    ])
}

pub fn get_help_total_lines() -> usize {
    HELP_LINES.len()
}

pub fn render_help_content(scroll: usize, visible_height: usize) -> Vec<RatatuiLine<'static>> {
    HELP_LINES
        .iter()
        .skip(scroll)
        .take(visible_height)
        .cloned()
        .collect()
}

pub fn render_help_modal(f: &mut Frame<'_>, scroll: usize, visible_height: usize, area: Rect) {
    f.render_widget(Clear, area);

    let help_block = Block::default()
        .title(theme::TITLE_HELP)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner_area = help_block.inner(area);
    f.render_widget(help_block, area);

    f.render_widget(
        Paragraph::new(render_help_content(scroll, visible_height)),
        inner_area,
    );

    let footer_area = Rect {
        y: inner_area.y + inner_area.height.saturating_sub(1),
        height: 1,
        ..inner_area
    };
    let arrows = scroll_arrows(scroll, get_help_total_lines(), visible_height);
    let mut footer = Vec::new();
    if !arrows.is_empty() {
        footer.push(Span::styled(arrows, Style::default().fg(Color::White)));
        footer.push(Span::styled(" scroll  ", Style::default().fg(theme::TEXT_MUTED)));
    }
    footer.push(Span::styled("?", Style::default().fg(Color::White)));
    footer.push(Span::styled(" close ", Style::default().fg(theme::TEXT_MUTED)));
    f.render_widget(
        Paragraph::new(RatatuiLine::from(footer)).alignment(Alignment::Right),
        footer_area,
    );
}
