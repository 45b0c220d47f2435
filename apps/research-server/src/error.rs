//! Error responses for the HTTP layer.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use company_research::AgentError;
use serde_json::json;
use thiserror::Error;

/// Failure of a request handler.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body was missing, malformed, or had the wrong shape.
    #[error("invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// The research agent returned an error.
    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Agent(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::InvalidBody(_) => tracing::debug!(error = %self, "rejected research request"),
            Self::Agent(_) => tracing::error!(error = %self, "research agent failed"),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
