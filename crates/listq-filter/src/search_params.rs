//! Query parameters for list requests: filter plus pagination.

use serde::Serialize;

use crate::filter::parse_filter;

/// Receives user-facing error messages.
///
/// List views report a bad filter to the user and carry on without it;
/// implementors decide how the message is shown.
pub trait Notifier {
    /// Shows an error message to the user.
    fn error(&self, message: &str);
}

/// A [`Notifier`] that reports through `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(%message, "Ignoring invalid filter");
    }
}

/// Ordered query parameters with `URLSearchParams` semantics.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair, keeping any existing pairs with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Sets `key` to `value`.
    ///
    /// The first existing pair with that key is updated in place and any
    /// further pairs with the same key are removed. Otherwise the pair is
    /// appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if any pair has the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the pairs as a slice, e.g. for `reqwest::RequestBuilder::query`.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Consumes the set and returns its pairs.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.pairs)
    }
}

impl FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Inputs of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSearchArgs {
    /// Filter expression; `None` or empty means no filter.
    pub filter: Option<String>,
    /// Number of records per page, sent as `limit`.
    pub page_size: usize,
    /// Zero-based page number used for offset pagination.
    pub page_index: usize,
    /// Opaque cursor from a previous response; wins over `page_index`.
    pub cursor: Option<String>,
    /// Sort columns, sent comma-joined as `order` (`-col` for descending).
    pub order: Vec<String>,
    /// Foreign-key columns to expand, sent comma-joined as `expand`.
    pub expand: Vec<String>,
    /// Ask the server for the total row count (`count=true`).
    pub count: bool,
}

impl ListSearchArgs {
    /// Creates arguments for the first page without a filter.
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: None,
            page_size,
            page_index: 0,
            cursor: None,
            order: Vec::new(),
            expand: Vec::new(),
            count: false,
        }
    }

    /// Sets the filter expression.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the page index.
    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Sets the cursor.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Sets the sort columns.
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the columns to expand.
    pub fn with_expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = expand.into_iter().map(Into::into).collect();
        self
    }

    /// Requests the total row count.
    pub fn with_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    /// Offset of the first record of `page_index`, or `None` on overflow.
    pub fn offset(&self) -> Option<usize> {
        self.page_index.checked_mul(self.page_size)
    }
}

/// Builds the query parameters for a list request.
///
/// Filter parameters come first, followed by `limit` and either `cursor` or
/// `offset` (`page_index * page_size`, only for non-zero pages). A cursor
/// always takes precedence over the page index. Non-empty `order` and
/// `expand` lists and `count=true` come last.
///
/// An invalid filter is reported once through `notifier` and left out; the
/// pagination parameters are still applied. An offset that does not fit in
/// `usize` is reported the same way and omitted.
///
/// # Example
///
/// ```
/// use listq_filter::{build_list_search_params, ListSearchArgs, TracingNotifier};
///
/// let args = ListSearchArgs::new(20).with_filter("a=1").with_page_index(2);
/// let params = build_list_search_params(&args, &TracingNotifier);
/// assert_eq!(params.get("filter[a]"), Some("1"));
/// assert_eq!(params.get("limit"), Some("20"));
/// assert_eq!(params.get("offset"), Some("40"));
/// ```
pub fn build_list_search_params(args: &ListSearchArgs, notifier: &dyn Notifier) -> SearchParams {
    let mut params = SearchParams::new();

    if let Some(filter) = args.filter.as_deref() {
        match parse_filter(filter) {
            Ok(pairs) => {
                for (key, value) in pairs {
                    params.set(key, value);
                }
            }
            Err(err) => notifier.error(&err.to_string()),
        }
    }

    params.set("limit", args.page_size.to_string());

    match args.cursor.as_deref() {
        Some(cursor) if !cursor.is_empty() => params.set("cursor", cursor),
        _ => {
            if args.page_index != 0 {
                match args.offset() {
                    Some(offset) => params.set("offset", offset.to_string()),
                    None => notifier.error(&format!(
                        "page {} of size {} is out of range",
                        args.page_index, args.page_size
                    )),
                }
            }
        }
    }

    if !args.order.is_empty() {
        params.set("order", args.order.join(","));
    }
    if !args.expand.is_empty() {
        params.set("expand", args.expand.join(","));
    }
    if args.count {
        params.set("count", "true");
    }

    tracing::debug!(params = params.len(), "Built list search params");
    params
}
