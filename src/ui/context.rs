use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use super::layout::centered_rect;
use super::theme;

pub struct RenderContext {
    pub size: Rect,
    pub main_area: Rect,
    pub footer_area: Rect,
    pub content_area: Rect,
    pub content_width: usize,
    pub help_popup_area: Rect,
    pub help_visible_height: usize,
    pub detail_popup_area: Rect,
}

impl RenderContext {
    #[must_use]
    pub fn new(size: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(size);
        let main_area = chunks[0];
        let footer_area = chunks[1];

        let inner = Block::default().borders(Borders::ALL).inner(main_area);
        let content_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner)[1];
        let content_width = content_area.width as usize;

        let help_popup_area = centered_rect(
            theme::HELP_POPUP_PERCENT_X,
            theme::HELP_POPUP_PERCENT_Y,
            size,
        );
        let help_visible_height = help_popup_area.height.saturating_sub(3) as usize;
        let detail_popup_area = centered_rect(
            theme::DETAIL_POPUP_PERCENT_X,
            theme::DETAIL_POPUP_PERCENT_Y,
            size,
        );

        Self {
            size,
            main_area,
            footer_area,
            content_area,
            content_width,
            help_popup_area,
            help_visible_height,
            detail_popup_area,
        }
    }

    #[must_use]
    pub fn for_test(width: u16, height: u16) -> Self {
        Self::new(Rect {
            x: 0,
            y: 0,
            width,
            height,
        })
    }
}
