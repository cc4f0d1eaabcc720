//! Tree Builder
//!
//! Rebuilds the folder hierarchy from a flat, path-tagged entry list. Every
//! entry is indexed by path before any linking happens, so the result does not
//! depend on the order the scanner emitted entries in.

use crate::tree::node::TreeNode;
use crate::types::{Entry, EntryKind};
use std::collections::HashMap;

/// Builds a forest of [`TreeNode`]s from scanned entries.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build the forest of top-level nodes.
    ///
    /// Roots and children keep input order. An entry whose parent folder is
    /// not in the input (or whose parent is a file) is dropped.
    pub fn build(entries: Vec<Entry>) -> Vec<TreeNode> {
        let index: HashMap<&str, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.path.as_str(), i))
            .collect();

        let mut roots = Vec::new();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
        for (i, entry) in entries.iter().enumerate() {
            match entry.parent_path() {
                None => roots.push(i),
                Some(parent) => {
                    if let Some(&p) = index.get(parent.as_str()) {
                        if entries[p].kind == EntryKind::Folder {
                            children[p].push(i);
                        }
                    }
                }
            }
        }

        let mut slots: Vec<Option<Entry>> = entries.into_iter().map(Some).collect();
        roots
            .into_iter()
            .filter_map(|i| assemble(i, &mut slots, &children))
            .collect()
    }
}

fn assemble(
    i: usize,
    slots: &mut [Option<Entry>],
    children: &[Vec<usize>],
) -> Option<TreeNode> {
    let entry = slots[i].take()?;
    let mut node = TreeNode::from(entry);
    if let Some(list) = node.children.as_mut() {
        for &c in &children[i] {
            if let Some(child) = assemble(c, slots, children) {
                list.push(child);
            }
        }
    }
    Some(node)
}
