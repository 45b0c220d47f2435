//! Types for the Tavily `/search` endpoint

use serde::{Deserialize, Serialize};

use super::common::{SearchDepth, TimeRange, Topic};
use crate::error::TavilyError;

/// Longest query Tavily accepts, in characters.
pub const MAX_QUERY_CHARS: usize = 400;

/// Most results a single search may return.
pub const MAX_RESULTS: u32 = 20;

/// Request body for `POST /search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search query
    pub query: String,

    /// Retrieval depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_depth: Option<SearchDepth>,

    /// Topic category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,

    /// Maximum number of results (API allows 0..=20)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    /// Ask Tavily for a short LLM-generated answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_answer: Option<bool>,

    /// Include cleaned page content for each result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_raw_content: Option<bool>,

    /// Include query-related image URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,

    /// Only return results from these domains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,

    /// Never return results from these domains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,

    /// Recency window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,

    /// Days back from today (news topic only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

impl SearchRequest {
    /// Create a new search request with the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Check the request against the limits Tavily enforces server-side.
    ///
    /// # Errors
    ///
    /// Returns [`TavilyError::InvalidRequest`] for a blank or over-long query
    /// and for `max_results` above [`MAX_RESULTS`].
    pub fn validate(&self) -> Result<(), TavilyError> {
        if self.query.trim().is_empty() {
            return Err(TavilyError::InvalidRequest("query must not be blank".into()));
        }
        let len = self.query.chars().count();
        if len > MAX_QUERY_CHARS {
            return Err(TavilyError::InvalidRequest(format!(
                "query is {len} characters, the limit is {MAX_QUERY_CHARS}"
            )));
        }
        if let Some(n) = self.max_results.filter(|n| *n > MAX_RESULTS) {
            return Err(TavilyError::InvalidRequest(format!(
                "max_results is {n}, the limit is {MAX_RESULTS}"
            )));
        }
        Ok(())
    }

    /// Set the retrieval depth
    #[must_use]
    pub const fn with_search_depth(mut self, depth: SearchDepth) -> Self {
        self.search_depth = Some(depth);
        self
    }

    /// Set the topic
    #[must_use]
    pub const fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    /// Set the maximum number of results
    #[must_use]
    pub const fn with_max_results(mut self, n: u32) -> Self {
        self.max_results = Some(n);
        self
    }

    /// Request an answer alongside the results
    #[must_use]
    pub const fn with_include_answer(mut self, include: bool) -> Self {
        self.include_answer = Some(include);
        self
    }

    /// Restrict results to a recency window
    #[must_use]
    pub const fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    /// Restrict results to the given domains
    #[must_use]
    pub fn with_include_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Exclude the given domains
    #[must_use]
    pub fn with_exclude_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }
}

/// A single search result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// URL of the result
    pub url: String,
    /// Title of the page
    #[serde(default)]
    pub title: String,
    /// Most query-relevant content extracted from the page
    #[serde(default)]
    pub content: String,
    /// Relevance score (0.0-1.0)
    #[serde(default)]
    pub score: f64,
    /// Cleaned full page content (if requested)
    #[serde(default)]
    pub raw_content: Option<String>,
    /// Publication date (news topic only)
    #[serde(default)]
    pub published_date: Option<String>,
}

/// An image returned with search results
///
/// Tavily returns bare URLs unless image descriptions are requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SearchImage {
    /// Image URL only
    Url(String),
    /// Image URL with a generated description
    Described {
        /// Image URL
        url: String,
        /// Generated description
        #[serde(default)]
        description: Option<String>,
    },
}

/// Response from `POST /search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as executed
    #[serde(default)]
    pub query: String,

    /// Short answer (only when `include_answer` was set)
    #[serde(default)]
    pub answer: Option<String>,

    /// Query-related images
    #[serde(default)]
    pub images: Vec<SearchImage>,

    /// Ranked results
    #[serde(default)]
    pub results: Vec<SearchResult>,

    /// Suggested follow-up questions
    #[serde(default)]
    pub follow_up_questions: Option<Vec<String>>,

    /// Server-side latency in seconds
    #[serde(default)]
    pub response_time: Option<f64>,
}
