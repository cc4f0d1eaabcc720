//! Tooling & Integration Layer
//!
//! Command-line entry points over the scanner, tree builder and HTTP server.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
