//! Request and result types for mutation operations.

use crate::types::{Entry, EntryKind};
use serde::{Deserialize, Serialize};

fn default_root_path() -> String {
    "/".to_string()
}

/// Body of `POST /create-folder`; carries either a folder or a file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_content: Option<String>,
    #[serde(default = "default_root_path")]
    pub path: String,
}

/// Body of `DELETE /delete-item`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    #[serde(alias = "name")]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Body of `PUT /edit-file`.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRequest {
    #[serde(alias = "name")]
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `PUT /rename-item`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub old_path: String,
    pub new_name: String,
}

/// A fully buffered upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub path: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Plain `{message}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{message, success}` response from rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameResponse {
    pub message: String,
    pub success: bool,
}

/// `{message, path, success}` response from upload.
///
/// `path` is the root-relative location the bytes were written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub path: String,
    pub success: bool,
}

/// `{items}` response from list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<Entry>,
}
