//! Filter expressions for list/search APIs.
//!
//! This crate turns a human-typed filter such as
//! `(latency > 2 || status >= 400) && method = "GET"` into the bracketed
//! query parameters understood by list endpoints
//! (`filter[$and][0][$or][0][latency][$gt]=2`, ...), and merges them with
//! pagination controls.
//!
//! # Example
//!
//! ```
//! use listq_filter::filter::parse_filter;
//!
//! let pairs = parse_filter("a=1 && b>2").unwrap();
//! assert_eq!(
//!     pairs,
//!     vec![
//!         ("filter[$and][0][a]".to_string(), "1".to_string()),
//!         ("filter[$and][1][b][$gt]".to_string(), "2".to_string()),
//!     ]
//! );
//! ```

pub mod filter;
pub mod search_params;

pub use filter::{parse_filter, FilterError, FilterParser, FilterResult, Group};
pub use search_params::{
    build_list_search_params, ListSearchArgs, Notifier, SearchParams, TracingNotifier,
};
