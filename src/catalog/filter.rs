use super::Project;

/// True when `project` carries every selected tag. An empty selection matches everything.
#[must_use]
pub fn matches<T: AsRef<str>>(project: &Project, selected: &[T]) -> bool {
    selected.iter().all(|tag| project.has_tag(tag.as_ref()))
}

/// AND-filter over the selected tags, preserving catalog order.
#[must_use]
pub fn apply<'a, T: AsRef<str>>(projects: &'a [Project], selected: &[T]) -> Vec<&'a Project> {
    if selected.is_empty() {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| matches(p, selected)).collect()
}
