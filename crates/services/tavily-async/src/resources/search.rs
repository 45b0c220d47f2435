//! `POST /search`.

use crate::client::Client;
use crate::config::Config;
use crate::error::TavilyError;
use crate::types::search::{SearchRequest, SearchResponse};

/// Handle for the search endpoint, borrowed from a [`Client`].
pub struct Search<'c, C: Config> {
    client: &'c Client<C>,
}

impl<C: Config> Search<'_, C> {
    /// Run one search.
    ///
    /// The request is checked with [`SearchRequest::validate`] first, so a
    /// request Tavily would reject never spends a credit or a retry.
    ///
    /// # Errors
    ///
    /// [`TavilyError::InvalidRequest`] before sending, otherwise whatever the
    /// transport or the API reports.
    pub async fn create(&self, req: SearchRequest) -> Result<SearchResponse, TavilyError> {
        req.validate()?;
        tracing::debug!(
            depth = ?req.search_depth,
            topic = ?req.topic,
            max_results = ?req.max_results,
            "tavily search"
        );
        self.client.post("/search", req).await
    }
}

impl<C: Config> Client<C> {
    /// Search endpoint.
    #[must_use]
    pub const fn search(&self) -> Search<'_, C> {
        Search { client: self }
    }
}
