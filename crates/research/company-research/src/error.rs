//! Error type for research agents.

use thiserror::Error;

/// Error returned by [`crate::ResearchAgent::run`].
#[derive(Error, Debug)]
pub enum AgentError {
    /// A search call against the external search API failed.
    #[error("search failed: {0}")]
    Search(String),

    /// The compiled result could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Any other failure inside the agent.
    #[error("internal agent error: {0}")]
    Internal(String),
}

impl AgentError {
    /// Create a search error.
    pub fn search<S: ToString>(s: S) -> Self {
        Self::Search(s.to_string())
    }

    /// Create an internal error.
    pub fn internal<S: ToString>(s: S) -> Self {
        Self::Internal(s.to_string())
    }
}

impl From<tavily_async::TavilyError> for AgentError {
    fn from(err: tavily_async::TavilyError) -> Self {
        Self::search(err)
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
