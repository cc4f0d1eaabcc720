//! Destination options for create and upload forms.

use crate::tree::node::TreeNode;
use serde::{Deserialize, Serialize};

pub const ROOT_LABEL: &str = "Root (/)";
pub const ROOT_VALUE: &str = "/";

/// A selectable destination folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOption {
    pub label: String,
    pub value: String,
}

impl PathOption {
    pub fn root() -> Self {
        PathOption {
            label: ROOT_LABEL.to_string(),
            value: ROOT_VALUE.to_string(),
        }
    }
}

/// Root option first, then one option per folder, depth-first.
///
/// Folder options are labeled and valued with the trailing-slash path built
/// from the folder names along the way down.
pub fn derive_path_options(forest: &[TreeNode]) -> Vec<PathOption> {
    let mut options = vec![PathOption::root()];
    for node in forest {
        push_folder(node, ROOT_VALUE, &mut options);
    }
    options
}

fn push_folder(node: &TreeNode, prefix: &str, options: &mut Vec<PathOption>) {
    if !node.is_folder() {
        return;
    }
    let full = format!("{}{}/", prefix, node.name);
    options.push(PathOption {
        label: full.clone(),
        value: full.clone(),
    });
    for child in node.children() {
        push_folder(child, &full, options);
    }
}
