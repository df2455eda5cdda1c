//! 数据模型层

pub mod file_tree;

pub use file_tree::{
    DuplicateNamePolicy, FileSnapshot, FileTree, FileTreeError, FileTreeRow, NodeIcon, NodeId,
    NodeKind,
};
