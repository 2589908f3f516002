//! Flatten command implementation.
//!
//! Parses a filter expression and prints the query parameters it becomes.

use listq_filter::{parse_filter, SearchParams};

use super::{CommandContext, CommandError, Result};
use crate::output::{format_pairs_json, format_pairs_table};

/// Options for the flatten command.
#[derive(Debug)]
pub struct FlattenOptions {
    /// Filter expression.
    pub expr: String,
    /// Print one URL-encoded query string instead of `key=value` lines.
    pub query_string: bool,
}

/// Executes the flatten command.
pub fn execute(ctx: &CommandContext, opts: &FlattenOptions) -> Result<()> {
    let params: SearchParams = parse_filter(&opts.expr)?.into_iter().collect();
    print!("{}", render(ctx, opts, &params)?);
    Ok(())
}

fn render(ctx: &CommandContext, opts: &FlattenOptions, params: &SearchParams) -> Result<String> {
    if ctx.json_output {
        let json = format_pairs_json(params.iter())?;
        return Ok(format!("{json}\n"));
    }

    if opts.query_string {
        let encoded = params
            .to_query_string()
            .map_err(|e| CommandError::Encode(e.to_string()))?;
        return Ok(format!("{encoded}\n"));
    }

    Ok(format_pairs_table(params.iter(), ctx.use_colors))
}
