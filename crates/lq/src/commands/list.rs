//! List command implementation.
//!
//! Fetches one page from a list endpoint using the filter and pagination
//! flags.

use listq_api::{ListClient, ListResponse};

use super::params::{build_params, search_args};
use super::{CommandContext, Result};
use crate::cli::PageArgs;
use crate::output::format_page_summary;

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions<'a> {
    /// Endpoint path.
    pub endpoint: &'a str,
    /// Filter and pagination flags.
    pub page: &'a PageArgs,
    /// Page size when `--limit` is not given.
    pub default_page_size: usize,
}

/// Executes the list command against `client`.
pub async fn execute(ctx: &CommandContext, client: &ListClient, opts: &ListOptions<'_>) -> Result<()> {
    let args = search_args(opts.page, opts.default_page_size)?;
    let params = build_params(ctx, &args);

    if ctx.verbose {
        eprintln!("GET {}{}", client.base_url(), opts.endpoint);
    }

    let response: ListResponse = client.list(opts.endpoint, params.as_pairs()).await?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for record in &response.records {
        println!("{}", serde_json::to_string(record)?);
    }

    if !ctx.quiet {
        eprint!(
            "{}",
            format_page_summary(
                response.records.len(),
                response.total_row_count,
                response.cursor.as_deref(),
                ctx.use_colors,
            )
        );
    }

    Ok(())
}
