use std::sync::Arc;

use company_research::ResearchAgent;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Agent invoked once per research request.
    pub agent: Arc<dyn ResearchAgent>,
}

impl AppState {
    pub fn new(agent: Arc<dyn ResearchAgent>) -> Self {
        Self { agent }
    }
}
