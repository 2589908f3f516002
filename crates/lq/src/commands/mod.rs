//! Command implementations for the lq CLI.

pub mod completions;
pub mod config;
pub mod flatten;
pub mod list;
pub mod params;

use std::io::IsTerminal;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter parsing error.
    #[error("filter error: {0}")]
    Filter(#[from] listq_filter::FilterError),

    /// API error.
    #[error("API error: {0}")]
    Api(#[from] listq_api::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Query string encoding error.
    #[error("encoding error: {0}")]
    Encode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are disabled by `--no-color`, by the `NO_COLOR` environment
    /// variable, by `output.color = false` in the config file, or when stdout
    /// is not a terminal.
    pub fn from_cli(cli: &Cli, config: &config::Config) -> Self {
        Self {
            json_output: cli.json,
            use_colors: colors_enabled(
                cli.no_color,
                std::env::var_os("NO_COLOR").is_some(),
                config.output.color,
                std::io::stdout().is_terminal(),
            ),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Decides whether output is colored.
///
/// An explicit `output.color = true` does not override a pipe.
fn colors_enabled(
    no_color_flag: bool,
    no_color_env: bool,
    configured: Option<bool>,
    is_terminal: bool,
) -> bool {
    !no_color_flag && !no_color_env && configured.unwrap_or(true) && is_terminal
}
