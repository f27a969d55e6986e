mod detail_ops;
mod filter_ops;
mod navigation;

use log::debug;

use crate::catalog::{self, Catalog, Project};
use crate::config::Config;
use crate::session::{OpenSelection, SelectionController, TagSelection};

/// Which pane receives movement and toggle keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    Tags,
    #[default]
    Projects,
}

/// Session controller. Owns the catalog, the derived tag vocabulary, both pieces of
/// session state and the memoized filter result.
pub struct App {
    pub config: Config,
    catalog: Catalog,
    vocabulary: Vec<String>,
    tag_selection: TagSelection,
    detail: SelectionController,
    /// Catalog indices of the projects passing the current filter.
    visible: Vec<usize>,
    /// Sorted selected tags the `visible` list was computed for.
    visible_key: Vec<String>,
    filter_runs: usize,
    pub focus: Focus,
    pub tag_cursor: usize,
    pub project_cursor: usize,
    /// First chip row shown when the tag bar has more rows than fit.
    pub tag_scroll: usize,
    pub scroll_offset: usize,
    pub detail_scroll: usize,
    pub help_visible: bool,
    pub help_scroll: usize,
    pub help_visible_height: usize,
    pub status_message: Option<String>,
    /// Last link handed to the clipboard, kept for the status banner and tests.
    pub last_copied: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let vocabulary = catalog::build_tag_index(catalog.projects());
        let visible = (0..catalog.len()).collect();
        debug!(
            "event=app_init projects={} tags={}",
            catalog.len(),
            vocabulary.len()
        );

        Self {
            config,
            catalog,
            vocabulary,
            tag_selection: TagSelection::new(),
            detail: SelectionController::new(),
            visible,
            visible_key: Vec::new(),
            filter_runs: 0,
            focus: Focus::default(),
            tag_cursor: 0,
            project_cursor: 0,
            tag_scroll: 0,
            scroll_offset: 0,
            detail_scroll: 0,
            help_visible: false,
            help_scroll: 0,
            help_visible_height: 0,
            status_message: None,
            last_copied: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sorted, deduplicated tags across the whole catalog. Chip order follows this.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    #[must_use]
    pub fn selected_tags(&self) -> &TagSelection {
        &self.tag_selection
    }

    #[must_use]
    pub fn filter_active(&self) -> bool {
        self.tag_selection.is_active()
    }

    /// Projects passing the current filter, in catalog order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        let projects = self.catalog.projects();
        self.visible.iter().map(|&i| &projects[i]).collect()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// How many times the filter has actually been evaluated.
    #[must_use]
    pub fn filter_runs(&self) -> usize {
        self.filter_runs
    }

    #[must_use]
    pub fn open_selection(&self) -> &OpenSelection {
        self.detail.state()
    }

    #[must_use]
    pub fn detail_open(&self) -> bool {
        self.detail.is_open()
    }

    /// The project shown in the detail view, resolved against the catalog.
    #[must_use]
    pub fn open_project(&self) -> Option<&Project> {
        self.detail.open_id().and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn current_tag(&self) -> Option<&str> {
        self.vocabulary.get(self.tag_cursor).map(String::as_str)
    }

    #[must_use]
    pub fn current_project(&self) -> Option<&Project> {
        let index = *self.visible.get(self.project_cursor)?;
        self.catalog.projects().get(index)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }
}
