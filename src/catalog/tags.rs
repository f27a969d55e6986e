use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::Project;

/// A well-formed tag: non-empty, no whitespace.
pub static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+$").unwrap());

/// A well-formed project id: starts alphanumeric, then alphanumerics, `_`, `.` or `-`.
pub static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").unwrap());

/// Collects every tag in the catalog, deduplicated and sorted ascending.
/// Tags are opaque and case-sensitive: `Eval` and `eval` are distinct.
#[must_use]
pub fn build(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter())
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
