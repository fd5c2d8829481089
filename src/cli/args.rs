//! CLI argument parsing
//!
//! ```text
//! kpiforge [options] <command>
//!
//! COMMANDS:
//!   translate [TEXT]   Translate a rule description (stdin if TEXT omitted)
//!   prompt [TEXT]      Print the prompt without calling the model
//!   vars               List the variable vocabulary
//!   history <action>   list | show N | export N | clear
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Parsed CLI arguments
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "kpiforge",
    version,
    about = "Translate natural-language KPI scoring rules into condition/formula expressions"
)]
pub struct Args {
    /// Configuration file (TOML); falls back to $KPIFORGE_CONFIG
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// History file (JSON); successful translations are appended to it
    #[arg(long, global = true)]
    pub history: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

/// CLI modes
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Mode {
    /// Translate a rule description into condition/formula
    Translate {
        #[command(flatten)]
        input: InputArgs,

        /// Write the JSON result to this file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Override the model name
        #[arg(long)]
        model: Option<String>,

        /// Override the API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Override the request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Print the rendered prompt without calling the model
    Prompt {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List permitted variables in canonical form
    Vars,

    /// Inspect the history file
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

/// Rule text source shared by `translate` and `prompt`
#[derive(ClapArgs, Debug, Clone, PartialEq, Default)]
pub struct InputArgs {
    /// Rule description; read from stdin when omitted
    pub text: Option<String>,

    /// Use the built-in sample rule
    #[arg(long, conflicts_with = "text")]
    pub example: bool,

    /// Ask for one JSON object per logic branch
    #[arg(long)]
    pub multi: bool,
}

/// History actions
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum HistoryAction {
    /// List records, newest first
    List,
    /// Show one record (1 = newest)
    Show { index: usize },
    /// Write one record's result to a JSON file
    Export {
        index: usize,
        /// Target file (default: kpi_<index>_<timestamp>.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Remove every record
    Clear,
}

/// Parse CLI arguments from an iterator (first item is the program name)
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args)
}
