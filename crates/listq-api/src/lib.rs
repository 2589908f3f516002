//! HTTP client for list/search endpoints.
//!
//! # Quick Start
//!
//! ```no_run
//! use listq_api::{ListClient, ListResponse};
//!
//! # async fn run() -> listq_api::Result<()> {
//! let client = ListClient::new("http://localhost:4000")?.with_token("secret");
//! let params = vec![("filter[status]".to_string(), "200".to_string())];
//! let page: ListResponse = client.list("/api/_admin/logs", &params).await?;
//! println!("{} entries", page.records.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::ListClient;
pub use error::{ApiError, Error, Result};
pub use models::ListResponse;
