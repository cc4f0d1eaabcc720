//! Directory scanner: recursive walk of the root into a flat entry list.

use crate::error::ApiError;
use crate::types::Entry;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Walks a root directory and snapshots every file and folder below it.
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scan the root recursively.
    ///
    /// A missing root is created and yields an empty list. Entries come out in
    /// pre-order with siblings sorted by file name. Any read or stat failure
    /// aborts the scan; no partial result is returned.
    pub fn scan(&self) -> Result<Vec<Entry>, ApiError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ApiError::io(
                    format!("Failed to create root directory {}", self.root.display()),
                    e,
                )
            })?;
            debug!(root = %self.root.display(), "Created missing root directory");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for item in WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
        {
            let item = item.map_err(|e| {
                let message = match e.path() {
                    Some(p) => format!("Error reading directory entry {}", p.display()),
                    None => "Error reading directory".to_string(),
                };
                ApiError::io(message, e.into())
            })?;

            let name = item.file_name().to_string_lossy().into_owned();
            let path = relative_path(&self.root, item.path())?;

            if item.file_type().is_dir() {
                entries.push(Entry::folder(name, path));
            } else {
                let bytes = std::fs::read(item.path()).map_err(|e| {
                    ApiError::io(format!("Error reading file {}", path), e)
                })?;
                let content = String::from_utf8_lossy(&bytes).into_owned();
                entries.push(Entry::file(name, path, content));
            }
        }

        debug!(root = %self.root.display(), entries = entries.len(), "Scan complete");
        Ok(entries)
    }
}

/// Root-relative, `/`-separated path with a leading `/`.
fn relative_path(root: &Path, full: &Path) -> Result<String, ApiError> {
    let relative = full.strip_prefix(root).map_err(|_| {
        ApiError::Internal(format!(
            "{} is not below {}",
            full.display(),
            root.display()
        ))
    })?;
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Ok(format!("/{}", segments.join("/")))
}
