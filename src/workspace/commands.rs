//! File command service: one method per mutation, each a single filesystem
//! call at a root-relative target.
//!
//! The HTTP handlers and the CLI parse input, call one method, and render the
//! result. Nothing here locks or rolls back; two concurrent calls on the same
//! path race with whatever guarantee the OS gives.

use crate::error::ApiError;
use crate::tree::{Scanner, TreeSnapshot};
use crate::types::{Entry, EntryKind};
use crate::workspace::paths::{display_relative, resolve, validate_name};
use crate::workspace::types::{
    CreateRequest, DeleteRequest, EditRequest, MessageResponse, RenameRequest, RenameResponse,
    UploadRequest, UploadResponse,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct FileCommandService {
    root: PathBuf,
    scanner: Scanner,
}

impl FileCommandService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            scanner: Scanner::new(root.clone()),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn list(&self) -> Result<Vec<Entry>, ApiError> {
        self.scanner.scan()
    }

    pub fn snapshot(&self) -> Result<TreeSnapshot, ApiError> {
        TreeSnapshot::capture(&self.scanner)
    }

    /// Dispatch a create request to folder or file creation.
    pub fn create(&self, req: &CreateRequest) -> Result<MessageResponse, ApiError> {
        let folder = req.folder_name.as_deref().filter(|n| !n.is_empty());
        let file = req.file_name.as_deref().filter(|n| !n.is_empty());
        match (folder, file) {
            (Some(name), _) => self.create_folder(&req.path, name),
            (None, Some(name)) => self.create_file(
                &req.path,
                name,
                req.file_type.as_deref().unwrap_or(""),
                req.file_content.as_deref().unwrap_or(""),
            ),
            (None, None) => Err(ApiError::Validation(
                "No folder name or file name provided".to_string(),
            )),
        }
    }

    /// Create `path/name` and any missing parents. Creating an existing
    /// folder succeeds without change.
    pub fn create_folder(&self, path: &str, name: &str) -> Result<MessageResponse, ApiError> {
        validate_name(name, "folder name")?;
        let target = resolve(&self.root, path)?.join(name);
        fs::create_dir_all(&target).map_err(|e| {
            warn!(target = %target.display(), error = %e, "Create folder failed");
            ApiError::io("Error creating item", e)
        })?;
        info!(path = %display_relative(&self.root, &target), "Folder created");
        Ok(MessageResponse {
            message: format!("Folder '{}' created successfully", name),
        })
    }

    /// Write `path/name.extension`, replacing any existing file.
    pub fn create_file(
        &self,
        path: &str,
        name: &str,
        extension: &str,
        content: &str,
    ) -> Result<MessageResponse, ApiError> {
        validate_name(name, "file name")?;
        let file_name = match extension.trim_start_matches('.') {
            "" => name.to_string(),
            ext => format!("{}.{}", name, ext),
        };
        validate_name(&file_name, "file name")?;

        let dir = resolve(&self.root, path)?;
        let target = dir.join(&file_name);
        fs::create_dir_all(&dir)
            .and_then(|_| fs::write(&target, content))
            .map_err(|e| {
                warn!(target = %target.display(), error = %e, "Create file failed");
                ApiError::io("Error creating item", e)
            })?;
        info!(path = %display_relative(&self.root, &target), bytes = content.len(), "File created");
        Ok(MessageResponse {
            message: format!("File '{}' created successfully", file_name),
        })
    }

    /// Rename an entry within its parent folder.
    ///
    /// Fails with a conflict, leaving the filesystem untouched, if the
    /// target name is already taken.
    pub fn rename(&self, req: &RenameRequest) -> Result<RenameResponse, ApiError> {
        validate_name(&req.new_name, "new name")?;
        let source = resolve(&self.root, &req.old_path)?;
        if source == self.root {
            return Err(ApiError::Validation("Cannot rename the root".to_string()));
        }
        let target = source
            .parent()
            .map(|p| p.join(&req.new_name))
            .ok_or_else(|| ApiError::Validation("Cannot rename the root".to_string()))?;

        if target.exists() {
            warn!(target = %target.display(), "Rename target already exists");
            return Err(ApiError::Conflict(format!(
                "A {} with this name already exists",
                req.kind
            )));
        }

        fs::rename(&source, &target).map_err(|e| {
            warn!(source = %source.display(), error = %e, "Rename failed");
            ApiError::io("Error renaming item", e)
        })?;
        info!(
            from = %display_relative(&self.root, &source),
            to = %display_relative(&self.root, &target),
            "Item renamed"
        );
        Ok(RenameResponse {
            message: format!("{} renamed successfully", req.kind.title()),
            success: true,
        })
    }

    /// Remove a folder recursively or unlink a file. A folder request that
    /// names a file still unlinks it. A missing path is an error.
    pub fn delete(&self, req: &DeleteRequest) -> Result<MessageResponse, ApiError> {
        let target = resolve(&self.root, &req.path)?;
        if target == self.root {
            return Err(ApiError::Validation("Cannot delete the root".to_string()));
        }
        let result = match req.kind {
            EntryKind::Folder if target.is_dir() => fs::remove_dir_all(&target),
            EntryKind::Folder | EntryKind::File => fs::remove_file(&target),
        };
        result.map_err(|e| {
            warn!(target = %target.display(), error = %e, "Delete failed");
            ApiError::io(format!("Error deleting {}", req.kind), e)
        })?;
        info!(path = %display_relative(&self.root, &target), kind = %req.kind, "Item deleted");
        Ok(MessageResponse {
            message: format!("{} '{}' deleted successfully", req.kind, req.path),
        })
    }

    /// Replace the full content of an existing file.
    pub fn edit(&self, req: &EditRequest) -> Result<MessageResponse, ApiError> {
        let target = resolve(&self.root, &req.path)?;
        fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&target)
            .and_then(|mut f| std::io::Write::write_all(&mut f, req.content.as_bytes()))
            .map_err(|e| {
                warn!(target = %target.display(), error = %e, "Edit failed");
                ApiError::io("Error updating file", e)
            })?;
        info!(path = %display_relative(&self.root, &target), bytes = req.content.len(), "File updated");
        Ok(MessageResponse {
            message: format!("File '{}' updated successfully", req.path),
        })
    }

    /// Write uploaded bytes verbatim to `path/file_name`, creating the
    /// destination folder and replacing any existing file.
    pub fn upload(&self, req: &UploadRequest) -> Result<UploadResponse, ApiError> {
        let file_name = upload_file_name(&req.file_name)
            .ok_or_else(|| ApiError::Validation("No valid file data provided".to_string()))?;
        let dir = resolve(&self.root, &req.path)?;
        let target = dir.join(file_name);
        fs::create_dir_all(&dir)
            .and_then(|_| fs::write(&target, &req.bytes))
            .map_err(|e| {
                warn!(target = %target.display(), error = %e, "Upload failed");
                ApiError::io("Error uploading file", e)
            })?;
        let relative = display_relative(&self.root, &target);
        info!(path = %relative, bytes = req.bytes.len(), "File uploaded");
        Ok(UploadResponse {
            message: format!("File '{}' uploaded successfully", file_name),
            path: relative,
            success: true,
        })
    }
}

/// Final component of a client-supplied file name.
fn upload_file_name(raw: &str) -> Option<&str> {
    raw.rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
}
