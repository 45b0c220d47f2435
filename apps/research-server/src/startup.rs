//! Construction of the long-lived collaborators from loaded config.

use std::sync::Arc;

use company_research::{AgentSettings, TavilyResearchAgent};
use research_config::ResearchConfig;
use tavily_async::{Client, TavilyConfig, TavilyError};

/// Build the process-wide search client.
///
/// Fails when no non-blank API key is available, before any listener exists.
pub fn search_client(config: &ResearchConfig) -> Result<Client<TavilyConfig>, TavilyError> {
    let tavily = &config.services.tavily;
    let mut client_config = TavilyConfig::new().with_api_base(tavily.base_url.clone());
    if let Some(key) = &tavily.api_key {
        client_config = client_config.with_secret_key(key.clone());
    }
    Client::with_config(client_config)
}

/// Wire the search client into the research agent.
pub fn research_agent(config: &ResearchConfig) -> Result<TavilyResearchAgent, TavilyError> {
    let client = Arc::new(search_client(config)?);
    Ok(TavilyResearchAgent::new(client, AgentSettings::from(&config.agent)))
}
