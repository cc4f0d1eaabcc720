//! Configuration
//!
//! Layered configuration for the server and logging. Sources, lowest to
//! highest precedence: built-in defaults, the global config file (or an
//! explicit `--config` file), `SHAREDIR__*` environment variables. CLI flags
//! are applied on top by the caller.

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `SHAREDIR__SERVER__BIND`.
pub const ENV_PREFIX: &str = "SHAREDIR";

fn default_root() -> PathBuf {
    PathBuf::from("/shared")
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_static_prefix() -> String {
    "/shared".to_string()
}

fn default_max_upload_bytes() -> usize {
    256 * 1024 * 1024
}

fn default_refresh_interval_secs() -> u64 {
    5
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory every operation is confined to
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// URL prefix under which raw files from the root are served
    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,

    /// Request body limit for uploads
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// UI polling interval
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            bind: default_bind(),
            static_prefix: default_static_prefix(),
            max_upload_bytes: default_max_upload_bytes(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl ServerConfig {
    /// Static prefix normalized to a leading slash and no trailing slash.
    pub fn normalized_static_prefix(&self) -> String {
        let trimmed = self.static_prefix.trim_matches('/');
        if trimmed.is_empty() {
            default_static_prefix()
        } else {
            format!("/{}", trimmed)
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SharedirConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
