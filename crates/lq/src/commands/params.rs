//! Params command implementation.
//!
//! Prints the query parameters of a list request without sending it.
//! An invalid filter is reported on stderr and left out, exactly as a list
//! request would do.

use listq_filter::{build_list_search_params, ListSearchArgs, SearchParams};

use super::{CommandContext, CommandError, Result};
use crate::cli::PageArgs;
use crate::output::{format_pairs_json, format_pairs_table, StderrNotifier};

/// Converts CLI paging flags to list arguments.
///
/// `--limit` wins over the configured page size.
pub fn search_args(page: &PageArgs, default_page_size: usize) -> Result<ListSearchArgs> {
    let page_size = page.limit.unwrap_or(default_page_size);
    if page_size == 0 {
        return Err(CommandError::Config(
            "Page size must be a positive integer".to_string(),
        ));
    }

    let mut args = ListSearchArgs::new(page_size)
        .with_page_index(page.page)
        .with_order(page.order.iter().map(String::as_str))
        .with_expand(page.expand.iter().map(String::as_str))
        .with_count(page.count);
    if let Some(filter) = &page.filter {
        args = args.with_filter(filter.as_str());
    }
    match page.cursor.as_deref() {
        Some(cursor) if !cursor.is_empty() => args = args.with_cursor(cursor),
        _ if args.offset().is_none() => {
            return Err(CommandError::Config(format!(
                "Page {} of size {} is out of range",
                page.page, page_size
            )));
        }
        _ => {}
    }
    Ok(args)
}

/// Builds list parameters, reporting filter errors on stderr.
pub fn build_params(ctx: &CommandContext, args: &ListSearchArgs) -> SearchParams {
    build_list_search_params(args, &StderrNotifier::new(ctx.use_colors))
}

/// Executes the params command.
pub fn execute(ctx: &CommandContext, page: &PageArgs, default_page_size: usize) -> Result<()> {
    let args = search_args(page, default_page_size)?;
    let params = build_params(ctx, &args);

    if ctx.json_output {
        println!("{}", format_pairs_json(params.iter())?);
    } else {
        print!("{}", format_pairs_table(params.iter(), ctx.use_colors));
    }

    Ok(())
}
