//! Configuration types for the research service.
//!
//! The root type is [`ResearchConfig`]. Every section uses `#[serde(default)]`
//! so partial files deserialize cleanly.

use company_research::AgentSettings;
use schemars::JsonSchema;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tavily_async::types::common::SearchDepth;

/// Root configuration, loaded from `research.json` files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ResearchConfig {
    /// Optional JSON Schema URL for IDE autocomplete support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// HTTP listener settings.
    pub server: ServerConfig,

    /// External service configurations.
    pub services: ServicesConfig,

    /// Research agent tuning.
    pub agent: AgentConfig,

    /// Logging and diagnostics configuration.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

/// External service configurations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServicesConfig {
    /// Tavily search API configuration.
    pub tavily: TavilyServiceConfig,
}

/// Tavily search API service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TavilyServiceConfig {
    /// Base URL for the Tavily API.
    pub base_url: String,

    /// API key (env-only, never serialized to config files).
    #[serde(skip)]
    #[schemars(skip)]
    pub api_key: Option<SecretString>,
}

impl Default for TavilyServiceConfig {
    fn default() -> Self {
        Self {
            base_url: tavily_async::config::TAVILY_DEFAULT_BASE.into(),
            api_key: None,
        }
    }
}

/// Research agent tuning, defaulting to [`AgentSettings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AgentConfig {
    /// Upper bound on searches planned per request.
    pub max_queries: usize,

    /// Results requested per search (Tavily caps this at 20).
    pub max_results_per_query: u32,

    /// Sources kept in the final report.
    pub max_sources: usize,

    /// Search depth; `advanced` costs two credits per search.
    pub search_depth: SearchDepth,

    /// Request a short synthesized answer per search.
    pub include_answer: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentSettings::default().into()
    }
}

impl From<AgentSettings> for AgentConfig {
    fn from(settings: AgentSettings) -> Self {
        Self {
            max_queries: settings.max_queries,
            max_results_per_query: settings.max_results_per_query,
            max_sources: settings.max_sources,
            search_depth: settings.search_depth,
            include_answer: settings.include_answer,
        }
    }
}

impl From<&AgentConfig> for AgentSettings {
    fn from(config: &AgentConfig) -> Self {
        Self {
            max_queries: config.max_queries,
            max_results_per_query: config.max_results_per_query,
            max_sources: config.max_sources,
            search_depth: config.search_depth,
            include_answer: config.include_answer,
        }
    }
}

/// Logging and diagnostics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Whether to enable JSON-formatted logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}
