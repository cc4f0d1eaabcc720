//! Filesystem tree: scan the root, rebuild the hierarchy, derive destinations.

pub mod builder;
pub mod node;
pub mod options;
pub mod walker;

pub use builder::TreeBuilder;
pub use node::TreeNode;
pub use options::{derive_path_options, PathOption};
pub use walker::Scanner;

use crate::error::ApiError;
use serde::Serialize;

/// Built forest plus its destination options, regenerated on every refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSnapshot {
    pub tree: Vec<TreeNode>,
    pub path_options: Vec<PathOption>,
}

impl TreeSnapshot {
    pub fn capture(scanner: &Scanner) -> Result<Self, ApiError> {
        let tree = TreeBuilder::build(scanner.scan()?);
        let path_options = derive_path_options(&tree);
        Ok(TreeSnapshot { tree, path_options })
    }
}
