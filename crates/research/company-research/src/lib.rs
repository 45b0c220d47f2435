//! Company research agent.
//!
//! [`ResearchAgent`] is the capability the HTTP layer depends on: given a
//! company and free-text notes it produces an opaque JSON result.
//! [`TavilyResearchAgent`] is the production implementation, which plans a
//! handful of web searches, runs them concurrently through a shared
//! [`tavily_async::Client`], and compiles a cited [`ResearchReport`].

pub mod agent;
pub mod error;
pub mod planner;
pub mod report;
pub mod tavily_agent;

pub use agent::{ResearchAgent, ResearchInput};
pub use error::AgentError;
pub use report::ResearchReport;
pub use tavily_agent::{AgentSettings, TavilyResearchAgent};
