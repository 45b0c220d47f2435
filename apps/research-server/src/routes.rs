//! Route table and handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use company_research::ResearchInput;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /research`.
///
/// Both fields are required strings; empty strings are accepted as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchRequest {
    pub company: String,
    pub user_notes: String,
}

impl From<ResearchRequest> for ResearchInput {
    fn from(req: ResearchRequest) -> Self {
        Self::new(req.company, req.user_notes)
    }
}

/// Build the service router with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/research", post(research))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn research(
    State(state): State<AppState>,
    payload: Result<Json<ResearchRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    tracing::info!(company = %request.company, "research requested");

    let result = state.agent.run(request.into()).await?;
    Ok(Json(result))
}
