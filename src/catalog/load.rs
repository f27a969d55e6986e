use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use super::tags::{ID_REGEX, TAG_REGEX};
use super::{Catalog, Project, ProjectId};

/// Catalog shipped with the binary, used when no catalog file is configured.
pub const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// On-disk catalog format: a list of `[[project]]` tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub project: Vec<Project>,
}

/// Configuration errors found while loading a catalog. Raised once at startup.
#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    InvalidId(String),
    DuplicateId(ProjectId),
    EmptyName(ProjectId),
    InvalidTag { project: ProjectId, tag: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid catalog: {err}"),
            Self::InvalidId(id) => write!(f, "invalid project id: {id:?}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id: {id}"),
            Self::EmptyName(id) => write!(f, "project {id} has an empty name"),
            Self::InvalidTag { project, tag } => {
                write!(f, "project {project} has an invalid tag: {tag:?}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<CatalogError> for io::Error {
    fn from(value: CatalogError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}

impl Catalog {
    /// Validates the projects and takes ownership of them. Duplicate tags within a
    /// project are dropped, keeping the first occurrence.
    pub fn from_projects(mut projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen_ids: HashSet<ProjectId> = HashSet::new();

        for project in &mut projects {
            if !ID_REGEX.is_match(project.id.as_str()) {
                return Err(CatalogError::InvalidId(project.id.to_string()));
            }
            if !seen_ids.insert(project.id.clone()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            if project.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(project.id.clone()));
            }
            if let Some(bad) = project.tags.iter().find(|t| !TAG_REGEX.is_match(t)) {
                return Err(CatalogError::InvalidTag {
                    project: project.id.clone(),
                    tag: bad.clone(),
                });
            }

            let before = project.tags.len();
            let mut seen_tags = HashSet::new();
            project.tags.retain(|t| seen_tags.insert(t.clone()));
            if project.tags.len() != before {
                warn!(
                    "event=duplicate_tags_dropped project={} dropped={}",
                    project.id,
                    before - project.tags.len()
                );
            }
        }

        Ok(Self { projects })
    }

    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_projects(file.project)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content)?;
        info!(
            "event=catalog_loaded source={} projects={}",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::parse(BUILTIN_CATALOG)?;
        info!("event=catalog_loaded source=builtin projects={}", catalog.len());
        Ok(catalog)
    }
}
