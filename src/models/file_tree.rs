//! 虚拟文件树数据模型

use compact_str::CompactString;
use slotmap::{new_key_type, SlotMap};
use std::fmt;

use crate::kernel::language::LanguageId;

new_key_type! { pub struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// Whether two siblings may carry the same name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNamePolicy {
    #[default]
    Allow,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    InvalidNodeId,
    ParentNotFound,
    ParentNotFolder,
    NameExists,
    NotAFile,
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::InvalidNodeId => write!(f, "invalid node id"),
            FileTreeError::ParentNotFound => write!(f, "parent folder not found"),
            FileTreeError::ParentNotFolder => write!(f, "parent is not a folder"),
            FileTreeError::NameExists => write!(f, "name already exists in parent"),
            FileTreeError::NotAFile => write!(f, "node is not a file"),
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone)]
enum NodeData {
    File {
        content: String,
        language: LanguageId,
    },
    Folder {
        children: Vec<NodeId>,
        expanded: bool,
    },
}

#[derive(Debug, Clone)]
struct Node {
    name: CompactString,
    parent: Option<NodeId>,
    data: NodeData,
}

impl Node {
    fn new_file(name: CompactString, parent: Option<NodeId>) -> Self {
        let language = LanguageId::from_name(&name);
        Self {
            name,
            parent,
            data: NodeData::File {
                content: String::new(),
                language,
            },
        }
    }

    fn new_folder(name: CompactString, parent: Option<NodeId>, expanded: bool) -> Self {
        Self {
            name,
            parent,
            data: NodeData::Folder {
                children: Vec::new(),
                expanded,
            },
        }
    }

    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::File { .. } => NodeKind::File,
            NodeData::Folder { .. } => NodeKind::Folder,
        }
    }

    fn children(&self) -> Option<&[NodeId]> {
        match &self.data {
            NodeData::Folder { children, .. } => Some(children),
            NodeData::File { .. } => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.data {
            NodeData::Folder { children, .. } => Some(children),
            NodeData::File { .. } => None,
        }
    }
}

/// Detached copy of a file node, handed to the tab row and editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnapshot {
    pub id: NodeId,
    pub name: String,
    pub path: String,
    pub content: String,
    pub language: LanguageId,
}

/// Nodes live in a flat arena; each one records its parent and folders keep
/// their children in insertion order. Paths are never stored, they are
/// rebuilt from the parent chain on demand.
#[derive(Debug, Default)]
pub struct FileTree {
    arena: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
    duplicate_names: DuplicateNamePolicy,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(duplicate_names: DuplicateNamePolicy) -> Self {
        Self {
            duplicate_names,
            ..Self::default()
        }
    }

    /// The coder view's starting workspace.
    pub fn with_demo_content() -> Self {
        const MAIN_JS: &str = "// Welcome to CyberCat Code Editor\n\
            // Start coding your security tools here...\n\
            \n\
            function hackTheGibson() {\n  console.log(\"I'm in!\");\n}\n\
            \n\
            hackTheGibson();";

        let mut tree = Self::new();
        if let Ok(src) = tree.insert_with_state(None, "src", NodeKind::Folder, true) {
            if let Ok(main) = tree.insert(Some(src), "main.js", NodeKind::File) {
                let _ = tree.set_content(main, MAIN_JS.to_string());
            }
        }
        tree
    }

    pub fn set_duplicate_names(&mut self, policy: DuplicateNamePolicy) {
        self.duplicate_names = policy;
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.arena.get(id).map(Node::kind)
    }

    pub fn is_folder(&self, id: NodeId) -> bool {
        self.kind(id) == Some(NodeKind::Folder)
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.kind(id) == Some(NodeKind::File)
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|n| n.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.arena.get(id).and_then(Node::children)
    }

    pub fn content(&self, id: NodeId) -> Option<&str> {
        match &self.arena.get(id)?.data {
            NodeData::File { content, .. } => Some(content),
            NodeData::Folder { .. } => None,
        }
    }

    pub fn language(&self, id: NodeId) -> Option<LanguageId> {
        match self.arena.get(id)?.data {
            NodeData::File { language, .. } => Some(language),
            NodeData::Folder { .. } => None,
        }
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.arena
            .get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Folder { expanded: true, .. }))
    }

    /// Slash-joined names from the top-level ancestor down to `id`.
    pub fn path(&self, id: NodeId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.arena.get(node_id)?;
            names.push(node.name.as_str());
            current = node.parent;
        }
        names.reverse();
        Some(names.join("/"))
    }

    pub fn file_snapshot(&self, id: NodeId) -> Option<FileSnapshot> {
        let node = self.arena.get(id)?;
        let NodeData::File { content, language } = &node.data else {
            return None;
        };
        Some(FileSnapshot {
            id,
            name: node.name.to_string(),
            path: self.path(id)?,
            content: content.clone(),
            language: *language,
        })
    }

    fn siblings(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => &self.roots,
            Some(parent_id) => self.children(parent_id).unwrap_or(&[]),
        }
    }

    fn name_taken(&self, parent: Option<NodeId>, name: &str, except: Option<NodeId>) -> bool {
        self.siblings(parent).iter().any(|&sibling| {
            Some(sibling) != except
                && self
                    .arena
                    .get(sibling)
                    .is_some_and(|n| n.name.as_str() == name)
        })
    }

    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, FileTreeError> {
        self.insert_with_state(parent, name, kind, false)
    }

    /// `expanded` is ignored for files.
    pub fn insert_with_state(
        &mut self,
        parent: Option<NodeId>,
        name: &str,
        kind: NodeKind,
        expanded: bool,
    ) -> Result<NodeId, FileTreeError> {
        if let Some(parent_id) = parent {
            let parent_node = self
                .arena
                .get(parent_id)
                .ok_or(FileTreeError::InvalidNodeId)?;
            if parent_node.kind() != NodeKind::Folder {
                return Err(FileTreeError::ParentNotFolder);
            }
        }

        if self.duplicate_names == DuplicateNamePolicy::Reject
            && self.name_taken(parent, name, None)
        {
            return Err(FileTreeError::NameExists);
        }

        let node = match kind {
            NodeKind::File => Node::new_file(name.into(), parent),
            NodeKind::Folder => Node::new_folder(name.into(), parent, expanded),
        };
        let id = self.arena.insert(node);

        match parent {
            None => self.roots.push(id),
            Some(parent_id) => {
                let children = self
                    .arena
                    .get_mut(parent_id)
                    .and_then(Node::children_mut)
                    .ok_or(FileTreeError::ParentNotFolder)?;
                children.push(id);
            }
        }

        Ok(id)
    }

    /// Creates `name` at the top level, or inside the folder found at
    /// `parent_path`. That folder is expanded so the new node is visible.
    /// An empty `parent_path` means the top level.
    pub fn create(
        &mut self,
        name: &str,
        kind: NodeKind,
        parent_path: Option<&str>,
    ) -> Result<NodeId, FileTreeError> {
        let parent = match parent_path.filter(|path| !path.is_empty()) {
            Some(path) => Some(
                self.find_folder_by_path(path)
                    .ok_or(FileTreeError::ParentNotFound)?,
            ),
            None => None,
        };

        let id = self.insert(parent, name, kind)?;
        if let Some(parent_id) = parent {
            self.expand(parent_id);
        }
        Ok(id)
    }

    pub fn rename(&mut self, id: NodeId, new_name: &str) -> Result<(), FileTreeError> {
        let parent = self
            .arena
            .get(id)
            .ok_or(FileTreeError::InvalidNodeId)?
            .parent;

        if self.duplicate_names == DuplicateNamePolicy::Reject
            && self.name_taken(parent, new_name, Some(id))
        {
            return Err(FileTreeError::NameExists);
        }

        let node = self.arena.get_mut(id).ok_or(FileTreeError::InvalidNodeId)?;
        node.name = new_name.into();
        if let NodeData::File { language, .. } = &mut node.data {
            *language = LanguageId::from_name(new_name);
        }
        Ok(())
    }

    /// Removes `id` together with its subtree and returns every removed id.
    pub fn delete(&mut self, id: NodeId) -> Result<Vec<NodeId>, FileTreeError> {
        let parent = self
            .arena
            .get(id)
            .ok_or(FileTreeError::InvalidNodeId)?
            .parent;

        match parent {
            None => self.roots.retain(|&root| root != id),
            Some(parent_id) => {
                if let Some(children) = self.arena.get_mut(parent_id).and_then(Node::children_mut)
                {
                    children.retain(|&child| child != id);
                }
            }
        }

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            if let Some(node) = self.arena.remove(node_id) {
                if let NodeData::Folder { children, .. } = node.data {
                    stack.extend(children);
                }
                removed.push(node_id);
            }
        }
        Ok(removed)
    }

    pub fn set_content(&mut self, id: NodeId, new_content: String) -> Result<(), FileTreeError> {
        match &mut self
            .arena
            .get_mut(id)
            .ok_or(FileTreeError::InvalidNodeId)?
            .data
        {
            NodeData::File { content, .. } => {
                *content = new_content;
                Ok(())
            }
            NodeData::Folder { .. } => Err(FileTreeError::NotAFile),
        }
    }

    /// Returns false when `id` is not a folder.
    pub fn toggle_expand(&mut self, id: NodeId) -> bool {
        match self.arena.get_mut(id).map(|n| &mut n.data) {
            Some(NodeData::Folder { expanded, .. }) => {
                *expanded = !*expanded;
                true
            }
            _ => false,
        }
    }

    pub fn expand(&mut self, id: NodeId) -> bool {
        match self.arena.get_mut(id).map(|n| &mut n.data) {
            Some(NodeData::Folder { expanded, .. }) if !*expanded => {
                *expanded = true;
                true
            }
            _ => false,
        }
    }

    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.find_path_where(path, |_| true)
    }

    pub fn find_folder_by_path(&self, path: &str) -> Option<NodeId> {
        self.find_path_where(path, |node| node.kind() == NodeKind::Folder)
    }

    /// Pre-order search, so with duplicate names the earliest match wins.
    fn find_path_where(&self, path: &str, accept: impl Fn(&Node) -> bool) -> Option<NodeId> {
        let segments: Vec<&str> = path.split('/').collect();
        let mut stack: Vec<(NodeId, usize)> =
            self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            if node.name.as_str() != segments[depth] {
                continue;
            }
            if depth + 1 == segments.len() {
                if accept(node) {
                    return Some(id);
                }
                continue;
            }
            if let Some(children) = node.children() {
                stack.extend(children.iter().rev().map(|&child| (child, depth + 1)));
            }
        }
        None
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeIcon {
    Folder,
    FolderOpen,
    Code,
    Text,
}

impl NodeIcon {
    /// Explorer icon for a file; independent of the wider language map.
    pub fn for_file_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return NodeIcon::Text;
        };
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "ts" | "tsx" | "py" | "cpp" | "java" | "go" => NodeIcon::Code,
            _ => NodeIcon::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub kind: NodeKind,
    pub icon: NodeIcon,
    pub is_expanded: bool,
}

impl FileTree {
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };

            let (icon, is_expanded) = match &node.data {
                NodeData::Folder { expanded, .. } => {
                    let icon = if *expanded {
                        NodeIcon::FolderOpen
                    } else {
                        NodeIcon::Folder
                    };
                    (icon, *expanded)
                }
                NodeData::File { .. } => (NodeIcon::for_file_name(&node.name), false),
            };

            result.push(FileTreeRow {
                id,
                depth,
                name: node.name.clone(),
                kind: node.kind(),
                icon,
                is_expanded,
            });

            if is_expanded {
                if let Some(children) = node.children() {
                    let child_depth = depth.saturating_add(1);
                    stack.extend(children.iter().rev().map(|&child| (child, child_depth)));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
