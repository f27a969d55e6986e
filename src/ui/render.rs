use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::chips::build_tag_bar;
use super::context::RenderContext;
use super::detail::render_detail_modal;
use super::footer::{project_count_label, render_footer};
use super::help::render_help_modal;
use super::layout::{split_tag_bar, tag_rows_visible};
use super::projects::build_project_list;
use super::scroll::ensure_selected_visible;
use super::theme;

pub fn render_app(f: &mut Frame<'_>, app: &mut App) {
    let context = RenderContext::new(f.area());

    let border_color = if app.filter_active() {
        theme::BORDER_FILTERED
    } else {
        theme::BORDER_DEFAULT
    };
    let main_block = Block::default()
        .title(theme::TITLE_APP)
        .title_top(RatatuiLine::from(project_count_label(app)).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    f.render_widget(main_block, context.main_area);

    let tag_bar = build_tag_bar(app, context.content_width);
    let chip_rows = tag_rows_visible(
        context.content_area.height as usize,
        tag_bar.pinned_height(),
        tag_bar.rows.len(),
    );
    ensure_selected_visible(
        &mut app.tag_scroll,
        tag_bar.cursor_row,
        tag_bar.rows.len(),
        chip_rows,
    );
    let (tag_area, list_area) =
        split_tag_bar(context.content_area, tag_bar.pinned_height() + chip_rows);
    f.render_widget(
        Paragraph::new(tag_bar.window(app.tag_scroll, chip_rows)),
        tag_area,
    );

    let list = build_project_list(app, list_area.width as usize);
    let cursor_line = list.cursor_line(app.project_cursor);
    let total_lines = list.lines.len();
    ensure_selected_visible(
        &mut app.scroll_offset,
        cursor_line,
        total_lines,
        list_area.height as usize,
    );

    #[allow(clippy::cast_possible_truncation)]
    let content = Paragraph::new(list.into_lines()).scroll((app.scroll_offset as u16, 0));
    f.render_widget(content, list_area);

    if let Some(ref msg) = app.status_message {
        #[allow(clippy::cast_possible_truncation)]
        let msg_width = msg.width() as u16 + 2;
        let status_area = Rect {
            x: list_area.x,
            y: list_area.y + list_area.height.saturating_sub(1),
            width: msg_width.min(list_area.width),
            height: 1,
        };
        let status = Paragraph::new(Span::styled(
            format!(" {msg} "),
            Style::default()
                .fg(theme::TEXT_ON_ACCENT)
                .bg(theme::STATUS_BG),
        ));
        f.render_widget(status, status_area);
    }

    f.render_widget(Paragraph::new(render_footer(app)), context.footer_area);

    let open = app.open_project().cloned();
    if let Some(project) = open {
        app.detail_scroll = render_detail_modal(
            f,
            &project,
            app.detail_scroll,
            context.detail_popup_area,
        );
    }

    if app.help_visible {
        app.help_visible_height = context.help_visible_height;
        render_help_modal(
            f,
            app.help_scroll,
            context.help_visible_height,
            context.help_popup_area,
        );
    }
}
