use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use dispatch::{LocalCommand, LocalDispatch, RemoteCommand, RemoteDispatch};
use listq_api::ListClient;

/// Environment variable holding the log filter.
const ENV_LOG: &str = "LISTQ_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                let use_colors = stderr_colors(&cli);
                eprintln!("{}", output::format_error_line(&e.to_string(), use_colors));
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `LISTQ_LOG`, then `RUST_LOG`, then the verbosity
/// flags.
fn init_logging(cli: &Cli) {
    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter.to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_ansi(stderr_colors(cli))
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Whether stderr output (errors, logs) is colored.
fn stderr_colors(cli: &Cli) -> bool {
    !cli.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, &config);

    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx, &config);
    }

    let client = build_client(cli, &config)?;

    if let Some(dispatch) = RemoteDispatch::from_cli(cli) {
        return dispatch.execute(&ctx, &config, &client).await;
    }

    Ok(())
}

/// Builds the HTTP client from flags, environment and config file.
fn build_client(cli: &Cli, config: &Config) -> commands::Result<ListClient> {
    let url = config.resolve_url(cli)?;
    let client = ListClient::new(url).map_err(|e| CommandError::Config(e.to_string()))?;
    Ok(match config.resolve_token(cli) {
        Some(token) => client.with_token(token),
        None => client,
    })
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Api(_) => "API_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Encode(_) => "ENCODE_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Filter(_) | CommandError::Encode(_) | CommandError::Json(_) => {
            ExitCode::from(1)
        }
        CommandError::Api(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Config(_) => ExitCode::from(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let filter_err = CommandError::Filter(listq_filter::FilterError::EmptyExpression);
        assert_eq!(error_code(&filter_err), "FILTER_ERROR");
        assert_eq!(error_exit_code(&filter_err), ExitCode::from(1));

        let config_err = CommandError::Config("missing".to_string());
        assert_eq!(error_code(&config_err), "CONFIG_ERROR");
        assert_eq!(error_exit_code(&config_err), ExitCode::from(5));

        let io_err = CommandError::Io(std::io::Error::other("boom"));
        assert_eq!(error_exit_code(&io_err), ExitCode::from(3));
    }

    #[test]
    fn test_api_errors_exit_with_two() {
        let err = CommandError::Api(listq_api::Error::InvalidUrl("x".to_string()));
        assert_eq!(error_code(&err), "API_ERROR");
        assert_eq!(error_exit_code(&err), ExitCode::from(2));
    }

    #[test]
    fn test_build_client_requires_url() {
        let mut cli = Cli::parse_from(["lq", "list", "/x"]);
        cli.url = None;
        cli.token = None;
        let result = build_client(&cli, &Config::default());
        assert!(matches!(result, Err(CommandError::Config(_))));
    }

    #[test]
    fn test_build_client_uses_config() {
        let mut cli = Cli::parse_from(["lq", "list", "/x"]);
        cli.url = None;
        cli.token = None;
        let config = Config {
            url: Some("http://localhost:4000/".to_string()),
            token: Some("tok".to_string()),
            ..Config::default()
        };
        let client = build_client(&cli, &config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.token(), Some("tok"));
    }
}
