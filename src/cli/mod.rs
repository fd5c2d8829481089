//! CLI module
//!
//! Provides:
//! - Argument parsing
//! - Configuration resolution (flag → env → defaults)
//! - Mode dispatch (translate, prompt, vars, history)
//! - Result rendering

pub mod args;
pub mod dispatch;
pub mod render;

// Re-exports
pub use args::{parse_args, Args, HistoryAction, InputArgs, Mode};
pub use dispatch::{run_cli_mode, ExitCode};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Translate(#[from] crate::translator::TranslateError),

    #[error("History error: {0}")]
    History(#[from] crate::history::HistoryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
