//! Sharedir CLI Binary
//!
//! Serves a shared directory over HTTP, or inspects it from the terminal.

use anyhow::Context;
use clap::Parser;
use sharedir::logging::init_logging;
use sharedir::tooling::cli::{Cli, CliContext};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut context =
        CliContext::new(cli.config.clone()).context("Error loading configuration")?;
    cli.apply_logging_overrides(context.config_mut());
    init_logging(Some(&context.config().logging)).context("Error initializing logging")?;

    let output = context.execute(&cli.command)?;
    println!("{}", output);
    Ok(())
}
