use crate::catalog::ProjectId;

/// Which project, if any, has its detail view open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OpenSelection {
    #[default]
    Closed,
    Open(ProjectId),
}

/// Single-slot state machine behind the detail view.
///
/// Selecting while open replaces the open project; there is no stack. The machine
/// has no terminal state and only returns to `Closed` through `dismiss`.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: OpenSelection,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &OpenSelection {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, OpenSelection::Open(_))
    }

    #[must_use]
    pub fn open_id(&self) -> Option<&ProjectId> {
        match &self.state {
            OpenSelection::Open(id) => Some(id),
            OpenSelection::Closed => None,
        }
    }

    /// Returns true if the state changed.
    pub fn select(&mut self, id: &ProjectId) -> bool {
        if self.open_id() == Some(id) {
            return false;
        }
        self.state = OpenSelection::Open(id.clone());
        true
    }

    /// Returns true if the state changed.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = OpenSelection::Closed;
        true
    }
}
