//! The research capability consumed by the HTTP layer.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AgentError;

/// Input handed to a research agent.
///
/// Serializes to exactly `{"company": .., "user_notes": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchInput {
    /// Subject of the research
    pub company: String,
    /// Free-text guidance from the caller
    pub user_notes: String,
}

impl ResearchInput {
    /// Build an input from its two fields.
    pub fn new(company: impl Into<String>, user_notes: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            user_notes: user_notes.into(),
        }
    }
}

/// Asynchronous research capability.
///
/// The returned value is opaque to callers and relayed as-is.
pub trait ResearchAgent: Send + Sync {
    /// Run one research job to completion.
    fn run(&self, input: ResearchInput) -> BoxFuture<'_, Result<Value, AgentError>>;
}
