/// The set of tags the user has selected.
///
/// Set semantics: a tag appears at most once and equality ignores order. Selection
/// order is kept only so the active-filter summary reads the way the user built it.
#[derive(Debug, Clone, Default)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `tag` if selected, otherwise add it. Returns true if the tag is now selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when at least one tag is selected, i.e. the filter is narrowing the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Selected tags in the order they were picked.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn summary(&self) -> String {
        self.tags.join(", ")
    }

    /// Order-independent snapshot, used as the memo key for filtered results.
    #[must_use]
    pub fn sorted(&self) -> Vec<String> {
        let mut key = self.tags.clone();
        key.sort();
        key
    }
}

impl PartialEq for TagSelection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for TagSelection {}

impl<S: AsRef<str>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for tag in iter {
            if !selection.contains(tag.as_ref()) {
                selection.toggle(tag.as_ref());
            }
        }
        selection
    }
}
