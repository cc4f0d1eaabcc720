//! Tree node types produced from a flat scan.

use crate::types::{Entry, EntryKind};
use serde::{Deserialize, Serialize};

/// An entry together with its nested children.
///
/// `children` is `Some` (possibly empty) for folders and `None` for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Pre-order traversal of this node and its descendants.
    pub fn walk(&self) -> Vec<&TreeNode> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}

impl From<Entry> for TreeNode {
    fn from(entry: Entry) -> Self {
        let children = match entry.kind {
            EntryKind::Folder => Some(Vec::new()),
            EntryKind::File => None,
        };
        TreeNode {
            name: entry.name,
            kind: entry.kind,
            path: entry.path,
            content: entry.content,
            children,
        }
    }
}

/// Flatten a forest back into pre-order.
pub fn flatten(forest: &[TreeNode]) -> Vec<&TreeNode> {
    forest.iter().flat_map(TreeNode::walk).collect()
}
