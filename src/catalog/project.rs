use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Declaration order is kept for display; only membership matters for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub details: ProjectDetails,
}

impl Project {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectDetails {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Demo,
    Paper,
    OpenReview,
}

impl LinkKind {
    pub const ALL: [LinkKind; 4] = [
        LinkKind::Github,
        LinkKind::Demo,
        LinkKind::Paper,
        LinkKind::OpenReview,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Github => "GitHub",
            LinkKind::Demo => "Demo",
            LinkKind::Paper => "Paper",
            LinkKind::OpenReview => "OpenReview",
        }
    }
}

/// Outbound links, one optional slot per kind. URIs are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub paper: Option<String>,
    #[serde(default)]
    pub openreview: Option<String>,
}

impl ProjectLinks {
    #[must_use]
    pub fn get(&self, kind: LinkKind) -> Option<&str> {
        match kind {
            LinkKind::Github => self.github.as_deref(),
            LinkKind::Demo => self.demo.as_deref(),
            LinkKind::Paper => self.paper.as_deref(),
            LinkKind::OpenReview => self.openreview.as_deref(),
        }
    }

    /// Present links in a fixed kind order. The position in this sequence is the
    /// number shown next to the link in the detail view.
    pub fn present(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        LinkKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|uri| (kind, uri)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}
