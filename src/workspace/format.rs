//! Format entry lists and trees as terminal text.
//!
//! Styling is only applied when the caller passes `color = true`; piped output
//! and `logging.color = false` get plain text.

use crate::tree::{TreeNode, TreeSnapshot};
use crate::types::{Entry, EntryKind};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Format a flat scan as a table of path, type and size.
pub fn format_entries_text(entries: &[Entry], color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Contents", color)));
    if entries.is_empty() {
        out.push_str("Root is empty.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Type", "Size"]);
    for entry in entries {
        let size = entry
            .content
            .as_ref()
            .map(|c| format!("{} B", c.len()))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![entry.path.clone(), entry.kind.to_string(), size]);
    }
    out.push_str(&format!("{}\n\n", table));
    let folders = entries.iter().filter(|e| e.is_folder()).count();
    out.push_str(&format!(
        "Total: {} folders, {} files.\n",
        folders,
        entries.len() - folders
    ));
    out
}

/// Format a tree with indentation, followed by its destination options.
pub fn format_tree_text(snapshot: &TreeSnapshot, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Tree", color)));
    out.push_str("/\n");
    for node in &snapshot.tree {
        push_node(node, 1, color, &mut out);
    }
    out.push('\n');
    out.push_str(&format!("{}\n\n", format_section_heading("Destinations", color)));
    for option in &snapshot.path_options {
        out.push_str(&format!("  {}\n", option.label));
    }
    out
}

fn push_node(node: &TreeNode, depth: usize, color: bool, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node.kind {
        EntryKind::Folder => {
            if color {
                out.push_str(&format!("{}{}/\n", indent, node.name.blue().bold()));
            } else {
                out.push_str(&format!("{}{}/\n", indent, node.name));
            }
            for child in node.children() {
                push_node(child, depth + 1, color, out);
            }
        }
        EntryKind::File => out.push_str(&format!("{}{}\n", indent, node.name)),
    }
}
