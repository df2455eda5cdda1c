use crate::models::NodeId;

/// Files open in the editor tab row, in the order they were opened.
///
/// Holds ids only; tab contents are read back from the tree, so an edit is
/// visible in every view on the next snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenTabs {
    files: Vec<NodeId>,
    active: Option<NodeId>,
}

impl OpenTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[NodeId] {
        &self.files
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.files.contains(&id)
    }

    /// Appends `id` unless already open, then makes it active.
    pub fn open(&mut self, id: NodeId) -> bool {
        let mut changed = false;
        if !self.contains(id) {
            self.files.push(id);
            changed = true;
        }
        if self.active != Some(id) {
            self.active = Some(id);
            changed = true;
        }
        changed
    }

    pub fn activate(&mut self, id: NodeId) -> bool {
        if !self.contains(id) || self.active == Some(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn close(&mut self, id: NodeId) -> bool {
        let Some(index) = self.files.iter().position(|&f| f == id) else {
            return false;
        };
        self.files.remove(index);
        if self.active == Some(id) {
            self.active = self.files.last().copied();
        }
        true
    }

    /// Drops every id in `removed`; the active tab falls back to the last one left.
    pub fn close_many(&mut self, removed: &[NodeId]) -> bool {
        let before = self.files.len();
        self.files.retain(|f| !removed.contains(f));
        if self.active.is_some_and(|active| removed.contains(&active)) {
            self.active = self.files.last().copied();
        }
        self.files.len() != before
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tabs.rs"]
mod tests;
