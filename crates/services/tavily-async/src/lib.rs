//! Async client for the Tavily search API.
//!
//! A [`Client`] is built once from a [`TavilyConfig`] and cannot exist
//! without an API key. Requests are typed, checked locally against Tavily's
//! limits before they are sent, and retried on transient failures. Credit
//! limit answers (432/433) come back at once as [`TavilyError::Api`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), tavily_async::TavilyError> {
//! use tavily_async::Client;
//! use tavily_async::types::search::SearchRequest;
//!
//! let client = Client::new()?;
//! let resp = client
//!     .search()
//!     .create(SearchRequest::new("Acme Corp funding").with_max_results(5))
//!     .await?;
//! for hit in resp.results {
//!     println!("{:.2} {}", hit.score, hit.url);
//! }
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod retry;
#[doc(hidden)]
pub mod test_support;
pub mod types;

pub use crate::client::Client;
pub use crate::config::TavilyConfig;
pub use crate::error::{ApiErrorObject, TavilyError};
