//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they talk to a server: local commands only
//! need the config file, remote commands need a [`ListClient`].

use listq_api::ListClient;

use crate::cli::{Cli, Commands, ConfigCommands, PageArgs, Shell};
use crate::commands::{self, config::Config, CommandContext, CommandError, Result};

/// Trait for commands that run without contacting a server.
pub trait LocalCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()>;
}

/// Trait for commands that call a list endpoint.
#[allow(async_fn_in_trait)]
pub trait RemoteCommand {
    /// Execute the command with a configured client.
    async fn execute(&self, ctx: &CommandContext, config: &Config, client: &ListClient)
        -> Result<()>;
}

/// Commands that don't contact a server.
pub enum LocalDispatch<'a> {
    Flatten { expr: &'a str, query_string: bool },
    Params(&'a PageArgs),
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
}

impl<'a> LocalDispatch<'a> {
    /// Try to create a local dispatch from the CLI command.
    /// Returns None if the command needs a server.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Commands::Flatten { expr, query_string } => Some(Self::Flatten {
                expr,
                query_string: *query_string,
            }),
            Commands::Params { page } => Some(Self::Params(page)),
            Commands::Config { command } => Some(Self::Config(command)),
            Commands::Completions { shell } => Some(Self::Completions(shell)),
            Commands::List { .. } => None,
        }
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()> {
        match self {
            Self::Flatten { expr, query_string } => {
                let opts = commands::flatten::FlattenOptions {
                    expr: expr.to_string(),
                    query_string: *query_string,
                };
                commands::flatten::execute(ctx, &opts)
            }
            Self::Params(page) => commands::params::execute(ctx, page, config.page_size()),
            Self::Config(command) => dispatch_config(ctx, config, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(
    ctx: &CommandContext,
    config: &Config,
    command: &Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx, config),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that call a list endpoint.
pub enum RemoteDispatch<'a> {
    List {
        endpoint: &'a str,
        page: &'a PageArgs,
    },
}

impl<'a> RemoteDispatch<'a> {
    /// Create a remote dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Commands::List { endpoint, page } => Some(Self::List { endpoint, page }),
            _ => None,
        }
    }
}

impl RemoteCommand for RemoteDispatch<'_> {
    async fn execute(
        &self,
        ctx: &CommandContext,
        config: &Config,
        client: &ListClient,
    ) -> Result<()> {
        match self {
            Self::List { endpoint, page } => {
                let opts = commands::list::ListOptions {
                    endpoint,
                    page,
                    default_page_size: config.page_size(),
                };
                commands::list::execute(ctx, client, &opts).await
            }
        }
    }
}
