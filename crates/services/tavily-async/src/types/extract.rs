//! Types for the Tavily `/extract` endpoint

use serde::{Deserialize, Serialize};

use super::common::SearchDepth;
use crate::error::TavilyError;

/// Most URLs a single extract call accepts.
pub const MAX_EXTRACT_URLS: usize = 20;

/// Request body for `POST /extract`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// URLs to extract content from (at most [`MAX_EXTRACT_URLS`])
    pub urls: Vec<String>,

    /// Extraction depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_depth: Option<SearchDepth>,

    /// Include image URLs found on each page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
}

impl ExtractRequest {
    /// Create an extract request for the given URLs
    #[must_use]
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            extract_depth: None,
            include_images: None,
        }
    }

    /// Set the extraction depth
    #[must_use]
    pub const fn with_extract_depth(mut self, depth: SearchDepth) -> Self {
        self.extract_depth = Some(depth);
        self
    }

    /// Check the URL count against what Tavily accepts.
    ///
    /// # Errors
    ///
    /// Returns [`TavilyError::InvalidRequest`] when no URLs are given or more
    /// than [`MAX_EXTRACT_URLS`] are.
    pub fn validate(&self) -> Result<(), TavilyError> {
        match self.urls.len() {
            0 => Err(TavilyError::InvalidRequest("urls must not be empty".into())),
            n if n > MAX_EXTRACT_URLS => Err(TavilyError::InvalidRequest(format!(
                "{n} urls given, the limit is {MAX_EXTRACT_URLS}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Content extracted from one URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Source URL
    pub url: String,
    /// Extracted page content
    #[serde(default)]
    pub raw_content: String,
    /// Image URLs (if requested)
    #[serde(default)]
    pub images: Vec<String>,
}

/// A URL that could not be extracted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedExtraction {
    /// Source URL
    pub url: String,
    /// Reason reported by the API
    #[serde(default)]
    pub error: String,
}

/// Response from `POST /extract`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Successfully extracted pages
    #[serde(default)]
    pub results: Vec<ExtractResult>,
    /// URLs that failed
    #[serde(default)]
    pub failed_results: Vec<FailedExtraction>,
    /// Server-side latency in seconds
    #[serde(default)]
    pub response_time: Option<f64>,
}
