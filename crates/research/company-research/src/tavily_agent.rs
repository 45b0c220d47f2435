//! Research agent backed by Tavily web search.

use std::sync::Arc;

use futures::future::{BoxFuture, try_join_all};
use serde_json::Value;
use tavily_async::types::common::SearchDepth;
use tavily_async::types::search::{MAX_RESULTS, SearchRequest, SearchResponse};
use tavily_async::{Client, TavilyConfig};
use tracing::{debug, info};

use crate::agent::{ResearchAgent, ResearchInput};
use crate::error::AgentError;
use crate::planner::{PlannedQuery, plan_queries};
use crate::report::ResearchReport;

/// Tuning knobs for [`TavilyResearchAgent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSettings {
    /// Upper bound on planned queries per run
    pub max_queries: usize,
    /// Results requested per query
    pub max_results_per_query: u32,
    /// Sources kept in the final report
    pub max_sources: usize,
    /// Retrieval depth for every query
    pub search_depth: SearchDepth,
    /// Ask the search API for a short answer per query
    pub include_answer: bool,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            max_queries: 3,
            max_results_per_query: 5,
            max_sources: 12,
            search_depth: SearchDepth::Basic,
            include_answer: true,
        }
    }
}

/// Plans searches for a company, runs them concurrently, and compiles a
/// [`ResearchReport`].
///
/// The search client is shared, never rebuilt per run.
#[derive(Debug, Clone)]
pub struct TavilyResearchAgent {
    client: Arc<Client<TavilyConfig>>,
    settings: AgentSettings,
}

impl TavilyResearchAgent {
    /// Create an agent over a shared search client.
    #[must_use]
    pub const fn new(client: Arc<Client<TavilyConfig>>, settings: AgentSettings) -> Self {
        Self { client, settings }
    }

    /// Settings this agent runs with.
    #[must_use]
    pub const fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    fn request_for(&self, query: &PlannedQuery) -> SearchRequest {
        SearchRequest::new(&query.text)
            .with_topic(query.topic)
            .with_search_depth(self.settings.search_depth)
            .with_max_results(self.settings.max_results_per_query.min(MAX_RESULTS))
            .with_include_answer(self.settings.include_answer)
    }

    async fn search(&self, query: &PlannedQuery) -> Result<SearchResponse, AgentError> {
        debug!(query = %query.text, topic = ?query.topic, "running search");
        let resp = self.client.search().create(self.request_for(query)).await?;
        debug!(query = %query.text, results = resp.results.len(), "search finished");
        Ok(resp)
    }

    async fn research(&self, input: ResearchInput) -> Result<Value, AgentError> {
        let plan = plan_queries(&input, self.settings.max_queries);
        info!(company = %input.company, queries = plan.len(), "starting research");

        let responses = try_join_all(plan.iter().map(|q| self.search(q))).await?;

        let report = ResearchReport::compile(
            input,
            plan.into_iter().map(|q| q.text).zip(responses),
            self.settings.max_sources,
        );
        info!(
            company = %report.company,
            sources = report.sources.len(),
            "research complete"
        );

        Ok(serde_json::to_value(report)?)
    }
}

impl ResearchAgent for TavilyResearchAgent {
    fn run(&self, input: ResearchInput) -> BoxFuture<'_, Result<Value, AgentError>> {
        Box::pin(self.research(input))
    }
}
