mod chips;
mod context;
mod detail;
mod footer;
mod help;
mod layout;
mod projects;
mod render;
mod scroll;
mod shared;
pub(crate) mod theme;

use crate::app::App;
use ratatui::text::Line as RatatuiLine;

pub use chips::{TagBar, build_tag_bar};
pub use context::RenderContext;
pub use detail::build_detail_lines;
pub use footer::render_footer;
pub use help::{get_help_total_lines, render_help_content};
pub use layout::centered_rect;
pub use projects::{ProjectList, build_project_list};
pub use render::render_app;
pub use scroll::ensure_selected_visible;
pub use shared::wrap_text;

pub fn render_project_view(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    projects::build_project_list(app, width).into_lines()
}

/// Detail payload lines for the open project, empty when the detail view is closed.
pub fn render_detail_view(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    app.open_project()
        .map(|project| detail::build_detail_lines(project, width))
        .unwrap_or_default()
}
