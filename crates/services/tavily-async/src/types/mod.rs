//! Request and response types for the Tavily API

/// Shared types used across endpoints
pub mod common;
/// Extract endpoint types
pub mod extract;
/// Search endpoint types
pub mod search;

pub use common::*;
pub use extract::{ExtractRequest, ExtractResponse};
pub use search::{SearchRequest, SearchResponse, SearchResult};
