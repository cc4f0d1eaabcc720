//! Sharedir: browser-based file manager for a single shared directory
//!
//! Scans the shared root into a flat entry list, rebuilds the folder tree for
//! rendering, and exposes create, rename, edit, upload and delete operations
//! over HTTP.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod workspace;
