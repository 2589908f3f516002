//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the lq CLI.

use clap::{Parser, Subcommand, ValueEnum};

/// lq - Filtered list queries against a REST API
#[derive(Parser, Debug)]
#[command(name = "lq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API base URL (default: from config)
    #[arg(long, global = true, env = "LISTQ_URL")]
    pub url: Option<String>,

    /// API token (default: from config)
    #[arg(long, global = true, env = "LISTQ_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a filter expression into query parameters
    #[command(alias = "f")]
    Flatten {
        /// Filter expression (e.g., "status >= 400 && method = 'GET'")
        expr: String,

        /// Print a single URL-encoded query string
        #[arg(long)]
        query_string: bool,
    },

    /// Show the query parameters of a list request
    #[command(alias = "p")]
    Params {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Fetch one page from a list endpoint
    #[command(alias = "l")]
    List {
        /// Endpoint path (e.g., "/api/records/v1/movies")
        endpoint: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Filter and pagination arguments shared by `params` and `list`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Filter expression
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Page size (default: from config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Zero-based page index, turned into an offset
    #[arg(long, default_value = "0")]
    pub page: usize,

    /// Pagination cursor from a previous response (overrides --page)
    #[arg(long)]
    pub cursor: Option<String>,

    /// Sort columns, comma-separated; prefix with '-' for descending
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub order: Vec<String>,

    /// Foreign-key columns to expand, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub expand: Vec<String>,

    /// Ask the server for the total row count
    #[arg(long)]
    pub count: bool,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key (url, token, page_size, output.color)
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
