use rustc_hash::FxHashMap;

use crate::kernel::services::ports::WorkspaceConfig;
use crate::models::{FileSnapshot, FileTree, FileTreeError, FileTreeRow, NodeId, NodeKind};

use super::chat::ChatState;
use super::tabs::OpenTabs;

/// Explorer pane: the tree plus the visible rows derived from it.
pub struct ExplorerState {
    tree: FileTree,
    pub rows: Vec<FileTreeRow>,
    index_by_id: FxHashMap<NodeId, usize>,
}

impl std::fmt::Debug for ExplorerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerState")
            .field("nodes", &self.tree.len())
            .field("rows_len", &self.rows.len())
            .finish()
    }
}

impl ExplorerState {
    pub fn new(tree: FileTree) -> Self {
        let mut state = Self {
            tree,
            rows: Vec::new(),
            index_by_id: FxHashMap::default(),
        };
        state.refresh_rows();
        state
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn row_index(&self, id: NodeId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    fn refresh_rows(&mut self) {
        self.rows = self.tree.flatten_for_view();
        self.index_by_id.clear();
        for (index, row) in self.rows.iter().enumerate() {
            self.index_by_id.insert(row.id, index);
        }
    }

    pub fn create(
        &mut self,
        name: &str,
        kind: NodeKind,
        parent_path: Option<&str>,
    ) -> Result<NodeId, FileTreeError> {
        let id = self.tree.create(name, kind, parent_path)?;
        self.refresh_rows();
        Ok(id)
    }

    pub fn rename(&mut self, id: NodeId, name: &str) -> Result<(), FileTreeError> {
        self.tree.rename(id, name)?;
        self.refresh_rows();
        Ok(())
    }

    pub fn delete(&mut self, id: NodeId) -> Result<Vec<NodeId>, FileTreeError> {
        let removed = self.tree.delete(id)?;
        self.refresh_rows();
        Ok(removed)
    }

    pub fn toggle_folder(&mut self, id: NodeId) -> bool {
        if !self.tree.toggle_expand(id) {
            return false;
        }
        self.refresh_rows();
        true
    }

    /// Rows carry no file content, so they are left alone.
    pub fn set_content(&mut self, id: NodeId, content: String) -> Result<(), FileTreeError> {
        self.tree.set_content(id, content)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub config: WorkspaceConfig,
    pub explorer: ExplorerState,
    pub tabs: OpenTabs,
    pub chat: ChatState,
}

impl AppState {
    pub fn new(mut tree: FileTree, config: WorkspaceConfig) -> Self {
        tree.set_duplicate_names(config.duplicate_names);
        Self {
            config,
            explorer: ExplorerState::new(tree),
            tabs: OpenTabs::new(),
            chat: ChatState::default(),
        }
    }

    /// Open tabs as detached copies, in tab order.
    pub fn open_files(&self) -> Vec<FileSnapshot> {
        let tree = self.explorer.tree();
        self.tabs
            .files()
            .iter()
            .filter_map(|&id| tree.file_snapshot(id))
            .collect()
    }

    pub fn active_file(&self) -> Option<FileSnapshot> {
        self.tabs
            .active()
            .and_then(|id| self.explorer.tree().file_snapshot(id))
    }
}
