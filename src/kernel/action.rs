use crate::models::{NodeId, NodeKind};

#[derive(Debug, Clone)]
pub enum Action {
    CreateNode {
        name: String,
        kind: NodeKind,
        parent_path: Option<String>,
    },
    RenameNode {
        id: NodeId,
        name: String,
    },
    DeleteNode {
        id: NodeId,
    },
    ToggleFolder {
        id: NodeId,
    },
    /// Explorer click: files open as tabs, folders toggle.
    SelectNode {
        id: NodeId,
    },
    ActivateTab {
        id: NodeId,
    },
    CloseTab {
        id: NodeId,
    },
    UpdateContent {
        id: NodeId,
        content: String,
    },
    ChatSubmit {
        prompt: String,
    },
    AssistantReplied {
        request_id: u64,
        reply: String,
    },
}
