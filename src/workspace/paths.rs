//! Root-relative path resolution for mutation operations.

use crate::error::ApiError;
use std::path::{Path, PathBuf};

/// Resolve a root-relative path (with or without leading/trailing slashes)
/// to a location under `root`.
///
/// `..` segments are rejected so no operation can reach outside the root.
pub fn resolve(root: &Path, relative: &str) -> Result<PathBuf, ApiError> {
    let mut resolved = root.to_path_buf();
    for segment in relative.split(['/', '\\']).filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                return Err(ApiError::Validation(format!(
                    "Path '{}' must not contain '..'",
                    relative
                )))
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Check that `name` is a single path component.
pub fn validate_name(name: &str, what: &str) -> Result<(), ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("No {} provided", what)));
    }
    if trimmed == "." || trimmed == ".." || name.contains(['/', '\\']) {
        return Err(ApiError::Validation(format!(
            "Invalid {} '{}'",
            what, name
        )));
    }
    Ok(())
}

/// Root-relative display form of a location under `root`.
pub fn display_relative(root: &Path, full: &Path) -> String {
    let rel = full.strip_prefix(root).unwrap_or(full);
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", segments.join("/"))
}
