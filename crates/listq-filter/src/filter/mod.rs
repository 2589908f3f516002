//! Filter expression parser and query-parameter flattener.
//!
//! # Supported Syntax
//!
//! ## Comparisons
//! - `col = value` - Equality (encoded as `filter[col]=value`)
//! - `col != value` - Inequality (`$ne`)
//! - `col ~ value` - Like (`$like`)
//! - `col < value`, `col <= value` - Less than (`$lt`, `$lte`)
//! - `col > value`, `col >= value` - Greater than (`$gt`, `$gte`)
//!
//! Values are identifiers, numbers or quoted text (`'...'` or `"..."`).
//! The `!~` operator and the `?`-prefixed "any" operators (`?=`, `?!=`,
//! `?~`, `?!~`, `?<`, `?<=`, `?>`, `?>=`) are recognized but rejected by the
//! flattener.
//!
//! ## Boolean Operators
//! - `&&` - AND
//! - `||` - OR
//! - `()` - Grouping
//!
//! `&&` and `||` have no relative precedence: mixing them on one level
//! requires parentheses.
//!
//! # Example
//!
//! ```
//! use listq_filter::filter::{FilterParser, Group, parse_filter};
//!
//! let group = FilterParser::parse("status >= 400 || latency > 2").unwrap();
//! assert!(matches!(group, Group::Or(_)));
//!
//! let pairs = parse_filter("status=200").unwrap();
//! assert_eq!(pairs, vec![("filter[status]".to_string(), "200".to_string())]);
//! ```

mod ast;
mod error;
mod flatten;
mod lexer;
mod parser;

pub use ast::{Expr, Group, JoinOp, Operand, SignOp};
pub use error::{FilterError, FilterResult};
pub use flatten::{flatten, flatten_with_prefix, parse_filter, FILTER_PREFIX};
pub use lexer::{FilterToken, Lexer, LexerError, LexerResult, PositionedToken};
pub use parser::FilterParser;
