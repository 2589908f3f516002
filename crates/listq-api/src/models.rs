//! Response types of list endpoints.

use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
///
/// Record APIs return `records`, while the admin endpoints name the array
/// after their content (`rows`, `entries`, `users`). All of them are read
/// into [`ListResponse::records`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ListResponse<T = serde_json::Value> {
    /// Total number of matching rows, when the endpoint reports it.
    #[serde(default, alias = "total_count", skip_serializing_if = "Option::is_none")]
    pub total_row_count: Option<i64>,

    /// Cursor for the next page, if there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// The records of this page.
    #[serde(default, alias = "rows", alias = "entries", alias = "users")]
    pub records: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Returns true if the server handed out a cursor for another page.
    pub fn has_next_page(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}
