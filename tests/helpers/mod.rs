#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use folio::app::App;
use folio::catalog::Catalog;
use folio::config::Config;
use folio::handlers;
use folio::ui;
use ratatui::{Terminal, backend::TestBackend};

pub const SCENARIO_CATALOG: &str = r#"
[[project]]
id = "P1"
name = "Metric One"
description = "First metric project"
tags = ["eval_metric", "github"]

[project.details]
overview = "Scores generated reports."
technologies = ["Python"]

[project.details.links]
github = "https://example.com/p1"
paper = "https://example.com/p1.pdf"

[[project]]
id = "P2"
name = "Benchmark Two"
description = "Second project"
tags = ["evaluation"]

[project.details]
overview = "Benchmarks models."
"#;

fn skip_clipboard() {
    // SAFETY: Tests run single-threaded per test file, env var is set before any other work
    unsafe {
        std::env::set_var("FOLIO_SKIP_CLIPBOARD", "1");
    }
}

pub struct TestContext {
    pub app: App,
}

impl TestContext {
    /// App over the built-in catalog.
    pub fn new() -> Self {
        skip_clipboard();
        let catalog = Catalog::builtin().expect("Built-in catalog must load");
        Self {
            app: App::new(Config::default(), catalog),
        }
    }

    pub fn with_catalog(content: &str) -> Self {
        Self::with_config_and_catalog(Config::default(), content)
    }

    pub fn with_config_and_catalog(config: Config, content: &str) -> Self {
        skip_clipboard();
        let catalog = Catalog::parse(content).expect("Failed to parse catalog");
        Self {
            app: App::new(config, catalog),
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.press_with_modifiers(key, KeyModifiers::NONE);
    }

    pub fn press_with_modifiers(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        handlers::handle_key(&mut self.app, KeyEvent::new(key, modifiers));
    }

    pub fn type_keys(&mut self, s: &str) {
        for c in s.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Moves the tag cursor onto `tag` and toggles it, leaving focus on the tag bar.
    pub fn toggle_chip(&mut self, tag: &str) {
        let target = self
            .app
            .vocabulary()
            .iter()
            .position(|t| t == tag)
            .unwrap_or_else(|| panic!("tag {tag} not in vocabulary"));
        if self.app.focus != folio::app::Focus::Tags {
            self.press(KeyCode::Tab);
        }
        self.press(KeyCode::Char('g'));
        for _ in 0..target {
            self.press(KeyCode::Char('l'));
        }
        self.press(KeyCode::Char(' '));
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.app
            .visible_projects()
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    pub fn open_id(&self) -> Option<String> {
        self.app.open_project().map(|p| p.id.to_string())
    }

    fn width() -> usize {
        ui::RenderContext::for_test(80, 24).content_width
    }

    fn to_strings(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    pub fn render_tags(&self) -> Vec<String> {
        Self::to_strings(&ui::build_tag_bar(&self.app, Self::width()).into_lines())
    }

    pub fn render_projects(&self) -> Vec<String> {
        Self::to_strings(&ui::render_project_view(&self.app, Self::width()))
    }

    pub fn render_detail(&self) -> Vec<String> {
        Self::to_strings(&ui::render_detail_view(&self.app, Self::width()))
    }

    /// Draws the full frame on a `TestBackend` and returns its rows.
    pub fn render_screen(&mut self, width: u16, height: u16) -> Vec<String> {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create terminal");
        terminal
            .draw(|f| ui::render_app(f, &mut self.app))
            .expect("Failed to draw");
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    pub fn screen_contains(&self, text: &str) -> bool {
        self.render_tags()
            .iter()
            .chain(self.render_projects().iter())
            .chain(self.render_detail().iter())
            .any(|line| line.contains(text))
    }

    pub fn status_contains(&self, text: &str) -> bool {
        self.app
            .status_message
            .as_ref()
            .is_some_and(|s| s.contains(text))
    }

    /// Verify invariants that must always hold after any operation.
    /// Call this at the end of every test.
    pub fn verify_invariants(&self) {
        self.verify_cursor_bounds();
        self.verify_visible_matches_filter();
    }

    fn verify_cursor_bounds(&self) {
        let count = self.app.visible_count();
        if count > 0 {
            assert!(
                self.app.project_cursor < count,
                "Project cursor {} out of bounds (visible={})",
                self.app.project_cursor,
                count
            );
        } else {
            assert_eq!(self.app.project_cursor, 0);
        }

        let tags = self.app.vocabulary().len();
        if tags > 0 {
            assert!(self.app.tag_cursor < tags, "Tag cursor out of bounds");
        }
    }

    fn verify_visible_matches_filter(&self) {
        let selected = self.app.selected_tags();
        for project in self.app.visible_projects() {
            for tag in selected.iter() {
                assert!(
                    project.has_tag(tag),
                    "{} is visible but lacks selected tag {tag}",
                    project.id
                );
            }
        }
        if !self.app.filter_active() {
            assert_eq!(self.app.visible_count(), self.app.catalog().len());
        }
    }
}
