//! kpiforge CLI
//!
//! Parses arguments, sets up logging, and hands off to mode dispatch.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kpiforge::cli::{run_cli_mode, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose).context("failed to initialise logging")?;

    let exit_code = run_cli_mode(args);
    std::process::exit(exit_code);
}

/// Log to stderr; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "kpiforge=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
}
