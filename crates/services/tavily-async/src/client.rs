//! HTTP transport: request building, auth headers, retries.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::TavilyError, retry};

/// Tavily API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration. Construction validates credentials, so a built client
/// always carries a usable key.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
    backoff: ExponentialBuilder,
}

impl Client<crate::config::TavilyConfig> {
    /// Creates a new client from the environment
    ///
    /// Uses environment variables for authentication:
    /// - `TAVILY_API_KEY` for bearer authentication
    /// - `TAVILY_BASE_URL` for custom API base URL
    ///
    /// # Errors
    ///
    /// Returns [`TavilyError::Config`] if `TAVILY_API_KEY` is unset or blank.
    pub fn new() -> Result<Self, TavilyError> {
        Self::with_config(crate::config::TavilyConfig::new())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TavilyError::Config`] if credentials are missing and
    /// [`TavilyError::Reqwest`] if the HTTP client cannot be built.
    pub fn with_config(config: C) -> Result<Self, TavilyError> {
        config.validate_auth()?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(60))
            .build()?;

        tracing::debug!("tavily client constructed");

        Ok(Self {
            http,
            config,
            backoff: retry::default_backoff(),
        })
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the backoff configuration for retry logic
    #[must_use]
    pub fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<O, TavilyError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .post(self.config.url(path))
                .headers(headers)
                .json(&body)
                .build()?)
        };
        self.execute(path, mk).await
    }

    async fn execute<O, M, Fut>(&self, path: &str, mk: M) -> Result<O, TavilyError>
    where
        O: DeserializeOwned,
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, TavilyError>> + Send,
    {
        let bytes = self.execute_raw(path, mk).await?;
        let resp: O =
            serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))?;
        Ok(resp)
    }

    async fn execute_raw<M, Fut>(&self, path: &str, mk: M) -> Result<bytes::Bytes, TavilyError>
    where
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, TavilyError>> + Send,
    {
        let http_client = self.http.clone();

        (|| async {
            let request = mk().await?;
            let response = http_client
                .execute(request)
                .await
                .map_err(TavilyError::Reqwest)?;

            let status = response.status();
            let bytes = response.bytes().await.map_err(TavilyError::Reqwest)?;

            if status.is_success() {
                return Ok(bytes);
            }

            Err(crate::error::deserialize_api_error(status, &bytes))
        })
        .retry(self.backoff)
        .when(TavilyError::is_retryable)
        .notify(|err, dur| {
            tracing::warn!(path, error = %err, "retrying tavily request in {dur:?}");
        })
        .await
        .inspect_err(|err| {
            if err.is_plan_limit() {
                tracing::error!(path, error = %err, "tavily credits exhausted");
            }
        })
    }
}
