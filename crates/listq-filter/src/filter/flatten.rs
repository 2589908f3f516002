//! Flattening of a [`Group`] tree into bracketed query parameters.
//!
//! The list API reads nested filters from the query string using
//! QS-style paths:
//!
//! ```text
//! filter[col]=value                          equality
//! filter[col][$gt]=value                     any other comparison
//! filter[$and][0][a]=1&filter[$and][1][b]=2  grouping
//! ```

use super::ast::{Expr, Group, SignOp};
use super::error::{FilterError, FilterResult};
use super::parser::FilterParser;

/// Root path segment of every filter parameter.
pub const FILTER_PREFIX: &str = "filter";

/// Parses `expr` and flattens it into `(key, value)` query parameters.
///
/// An empty string yields no parameters without invoking the parser.
///
/// # Errors
///
/// Propagates parse errors from [`FilterParser::parse`] and fails with
/// [`FilterError::UnsupportedOperator`] for operators the list API cannot
/// express. No partial output is returned.
///
/// # Example
///
/// ```
/// use listq_filter::filter::parse_filter;
///
/// let pairs = parse_filter("(a>1 && a<5) || b=3").unwrap();
/// assert_eq!(pairs[0].0, "filter[$or][0][$and][0][a][$gt]");
/// assert_eq!(pairs[2].0, "filter[$or][1][b]");
/// ```
pub fn parse_filter(expr: &str) -> FilterResult<Vec<(String, String)>> {
    if expr.is_empty() {
        return Ok(Vec::new());
    }

    let group = FilterParser::parse(expr)?;
    let params = flatten(&group)?;
    tracing::debug!(filter = expr, params = params.len(), "Flattened filter");
    Ok(params)
}

/// Flattens a parsed filter using the `filter` root path.
pub fn flatten(group: &Group) -> FilterResult<Vec<(String, String)>> {
    flatten_with_prefix(group, FILTER_PREFIX)
}

/// Flattens a parsed filter below an arbitrary root path.
pub fn flatten_with_prefix(group: &Group, prefix: &str) -> FilterResult<Vec<(String, String)>> {
    let mut params = Vec::new();
    traverse(&mut params, prefix, group)?;
    Ok(params)
}

fn traverse(params: &mut Vec<(String, String)>, path: &str, group: &Group) -> FilterResult<()> {
    match group {
        Group::Leaf(expr) => {
            params.push(leaf_param(path, expr)?);
            Ok(())
        }
        Group::And(children) => traverse_children(params, path, "$and", children),
        Group::Or(children) => traverse_children(params, path, "$or", children),
    }
}

fn traverse_children(
    params: &mut Vec<(String, String)>,
    path: &str,
    combiner: &str,
    children: &[Group],
) -> FilterResult<()> {
    match children {
        [] => Ok(()),
        // A lone child needs no combiner.
        [child] => traverse(params, path, child),
        _ => {
            for (i, child) in children.iter().enumerate() {
                traverse(params, &format!("{path}[{combiner}][{i}]"), child)?;
            }
            Ok(())
        }
    }
}

fn leaf_param(path: &str, expr: &Expr) -> FilterResult<(String, String)> {
    let column = expr.left.literal();
    let key = match wire_operator(expr.op)? {
        Some(op) => format!("{path}[{column}][{op}]"),
        None => format!("{path}[{column}]"),
    };
    Ok((key, expr.right.literal().to_string()))
}

/// Maps a comparison to its query-string token. Equality has none.
fn wire_operator(op: SignOp) -> FilterResult<Option<&'static str>> {
    match op {
        SignOp::Eq => Ok(None),
        SignOp::Neq => Ok(Some("$ne")),
        SignOp::Like => Ok(Some("$like")),
        SignOp::Lt => Ok(Some("$lt")),
        SignOp::Lte => Ok(Some("$lte")),
        SignOp::Gt => Ok(Some("$gt")),
        SignOp::Gte => Ok(Some("$gte")),
        SignOp::NotLike
        | SignOp::AnyEq
        | SignOp::AnyNeq
        | SignOp::AnyLike
        | SignOp::AnyNotLike
        | SignOp::AnyLt
        | SignOp::AnyLte
        | SignOp::AnyGt
        | SignOp::AnyGte => Err(FilterError::unsupported(op)),
    }
}
