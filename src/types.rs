//! Core types shared by the scanner, tree builder, and HTTP surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a filesystem object, fixed at discovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }

    /// Capitalized form used in user-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Folder => "Folder",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filesystem object discovered by a scan.
///
/// `path` is root-relative, `/`-separated, and always starts with `/`.
/// `content` is only set for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Entry {
    pub fn folder(name: impl Into<String>, path: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::Folder,
            path: path.into(),
            content: None,
        }
    }

    pub fn file(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::File,
            path: path.into(),
            content: Some(content.into()),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Path of the containing folder, or `None` for a top-level entry.
    pub fn parent_path(&self) -> Option<String> {
        parent_path(&self.path)
    }
}

/// Drop the final segment of a root-relative path.
///
/// Returns `None` when nothing remains, i.e. the path names a top-level entry.
pub fn parent_path(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    segments.pop()?;
    if segments.is_empty() {
        None
    } else {
        Some(format!("/{}", segments.join("/")))
    }
}
