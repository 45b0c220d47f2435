//! `POST /extract`.

use crate::client::Client;
use crate::config::Config;
use crate::error::TavilyError;
use crate::types::extract::{ExtractRequest, ExtractResponse};

/// Handle for the extract endpoint, borrowed from a [`Client`].
pub struct Extract<'c, C: Config> {
    client: &'c Client<C>,
}

impl<C: Config> Extract<'_, C> {
    /// Fetch cleaned page content for up to twenty URLs.
    ///
    /// Per-URL failures come back in
    /// [`ExtractResponse::failed_results`], not as an error.
    ///
    /// # Errors
    ///
    /// [`TavilyError::InvalidRequest`] for an empty or oversized URL list,
    /// otherwise whatever the transport or the API reports.
    pub async fn create(&self, req: ExtractRequest) -> Result<ExtractResponse, TavilyError> {
        req.validate()?;
        tracing::debug!(urls = req.urls.len(), "tavily extract");
        self.client.post("/extract", req).await
    }
}

impl<C: Config> Client<C> {
    /// Extract endpoint.
    #[must_use]
    pub const fn extract(&self) -> Extract<'_, C> {
        Extract { client: self }
    }
}
