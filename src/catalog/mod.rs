mod filter;
mod load;
mod project;
mod tags;

pub use filter::{apply, matches};
pub use load::{BUILTIN_CATALOG, CatalogError, CatalogFile};
pub use project::{LinkKind, Project, ProjectDetails, ProjectId, ProjectLinks};
pub use tags::{ID_REGEX, TAG_REGEX, build as build_tag_index};

/// The project catalog, validated once at load and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| &p.id == id)
    }
}
