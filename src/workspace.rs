//! Workspace domain: mutation commands over the shared root and their text
//! formatting.

mod commands;
mod format;
pub mod paths;
mod types;

pub use commands::FileCommandService;
pub use format::{format_entries_text, format_section_heading, format_tree_text};
pub use types::{
    CreateRequest, DeleteRequest, EditRequest, ListResponse, MessageResponse, RenameRequest,
    RenameResponse, UploadRequest, UploadResponse,
};
