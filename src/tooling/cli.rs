//! CLI Tooling
//!
//! Command-line interface for serving the shared directory and inspecting it
//! from a terminal.

use crate::config::{ConfigLoader, SharedirConfig};
use crate::error::ApiError;
use crate::tree::TreeSnapshot;
use crate::workspace::{format_entries_text, format_tree_text, FileCommandService, ListResponse};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// Sharedir CLI - browser-based file manager for one shared directory
#[derive(Parser)]
#[command(name = "sharedir")]
#[command(about = "Browser-based file manager for a single shared directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server and web UI
    Serve {
        /// Shared root directory
        #[arg(long)]
        root: Option<PathBuf>,
        /// Address to listen on (host:port)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Scan the root and print every entry
    List {
        /// Shared root directory
        #[arg(long)]
        root: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Scan the root and print the folder tree and destinations
    Tree {
        /// Shared root directory
        #[arg(long)]
        root: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    /// Fold the global logging flags into `config`.
    pub fn apply_logging_overrides(&self, config: &mut SharedirConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if self.log_file.is_some() {
            config.logging.file = self.log_file.clone();
        }
    }
}

/// CLI context: resolved configuration plus command dispatch.
pub struct CliContext {
    config: SharedirConfig,
}

impl CliContext {
    /// Create a new CLI context from an optional explicit config file.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_optional(config_path.as_deref())?;
        Ok(Self { config })
    }

    pub fn from_config(config: SharedirConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SharedirConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SharedirConfig {
        &mut self.config
    }

    /// Execute a command, returning text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Serve { root, bind } => {
                let mut server = self.config.server.clone();
                if let Some(root) = root {
                    server.root = root.clone();
                }
                if let Some(bind) = bind {
                    server.bind = bind.clone();
                }
                let rt = tokio::runtime::Runtime::new()
                    .map_err(|e| ApiError::io("Failed to start async runtime", e))?;
                rt.block_on(crate::server::serve(server))?;
                Ok("Server stopped.".to_string())
            }
            Commands::List { root, format } => {
                let service = self.service(root.as_ref());
                let items = service.list()?;
                info!(root = %service.root().display(), entries = items.len(), "Listed root");
                match parse_format(format)? {
                    OutputFormat::Json => to_json(&ListResponse { items }),
                    OutputFormat::Text => Ok(format_entries_text(&items, self.use_color())),
                }
            }
            Commands::Tree { root, format } => {
                let snapshot: TreeSnapshot = self.service(root.as_ref()).snapshot()?;
                match parse_format(format)? {
                    OutputFormat::Json => to_json(&snapshot),
                    OutputFormat::Text => Ok(format_tree_text(&snapshot, self.use_color())),
                }
            }
        }
    }

    /// Style text output only for an interactive stdout with color enabled.
    fn use_color(&self) -> bool {
        self.config.logging.color && std::io::stdout().is_terminal()
    }

    fn service(&self, root: Option<&PathBuf>) -> FileCommandService {
        let root = root.cloned().unwrap_or_else(|| self.config.server.root.clone());
        FileCommandService::new(root)
    }
}

enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::Validation(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn context() -> CliContext {
        CliContext::from_config(SharedirConfig::default())
    }

    #[test]
    fn list_json_contract_has_items() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/a.txt"), "hi").unwrap();

        let output = context()
            .execute(&Commands::List {
                root: Some(temp.path().to_path_buf()),
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = parsed["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["path"], "/docs/a.txt");
        assert_eq!(items[1]["content"], "hi");
    }

    #[test]
    fn tree_json_contract_has_tree_and_options() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();

        let output = context()
            .execute(&Commands::Tree {
                root: Some(temp.path().to_path_buf()),
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["tree"][0]["path"], "/a");
        assert_eq!(parsed["tree"][0]["children"][0]["path"], "/a/b");
        let options = parsed["pathOptions"].as_array().unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[2]["value"], "/a/b/");
    }

    #[test]
    fn text_output_is_plain_when_color_disabled() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        let mut config = SharedirConfig::default();
        config.logging.color = false;

        let output = CliContext::from_config(config)
            .execute(&Commands::Tree {
                root: Some(temp.path().to_path_buf()),
                format: "text".to_string(),
            })
            .unwrap();
        assert!(output.contains("  docs/\n"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let temp = TempDir::new().unwrap();
        let result = context().execute(&Commands::List {
            root: Some(temp.path().to_path_buf()),
            format: "yaml".to_string(),
        });
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn logging_flags_override_config() {
        let cli = Cli::parse_from([
            "sharedir",
            "--log-level",
            "debug",
            "--log-output",
            "stdout",
            "list",
        ]);
        let mut config = SharedirConfig::default();
        cli.apply_logging_overrides(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.output, "stdout");
        assert_eq!(config.logging.format, "text");
    }
}
