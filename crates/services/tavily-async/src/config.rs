//! Credentials and endpoint configuration.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::TavilyError;

/// Default Tavily API base URL
pub const TAVILY_DEFAULT_BASE: &str = "https://api.tavily.com";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "TAVILY_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "TAVILY_BASE_URL";

/// Configuration for the Tavily client
///
/// Debug output redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct TavilyConfig {
    api_base: String,
    api_key: Option<SecretString>,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        let api_key = env_trimmed(ENV_API_KEY).map(SecretString::from);
        let api_base = env_trimmed(ENV_BASE_URL).unwrap_or_else(|| TAVILY_DEFAULT_BASE.into());

        Self { api_base, api_key }
    }
}

impl TavilyConfig {
    /// Creates a new configuration from the environment
    ///
    /// Reads:
    /// - `TAVILY_API_KEY` for bearer authentication
    /// - `TAVILY_BASE_URL` for a custom API base URL (defaults to `https://api.tavily.com`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Sets the API key from an already-wrapped secret
    #[must_use]
    pub fn with_secret_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn trimmed_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|s| s.expose_secret().trim())
            .filter(|k| !k.is_empty())
    }
}

/// Configuration trait for the Tavily client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, TavilyError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), TavilyError>;
}

impl Config for TavilyConfig {
    fn headers(&self) -> Result<HeaderMap, TavilyError> {
        let mut h = HeaderMap::new();

        if let Some(key) = self.trimmed_key() {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| TavilyError::Config("Invalid Authorization value".into()))?;
            value.set_sensitive(true);
            h.insert(AUTHORIZATION, value);
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn validate_auth(&self) -> Result<(), TavilyError> {
        match self.trimmed_key() {
            Some(_) => Ok(()),
            None => Err(TavilyError::Config(format!(
                "Missing Tavily credentials: set {ENV_API_KEY} environment variable"
            ))),
        }
    }
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
