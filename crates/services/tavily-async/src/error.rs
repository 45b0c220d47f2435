//! Error types and Tavily error-body parsing.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the Tavily API client
#[derive(Debug, Error)]
pub enum TavilyError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Tavily
    #[error("API error: {0}")]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// Request rejected locally because Tavily would refuse it
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// API error object normalized from a Tavily error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    pub status_code: Option<u16>,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Tavily wraps errors as `{"detail": {"error": "..."}}`; some gateways
/// answer with a bare `{"detail": "..."}` instead.
#[derive(Deserialize)]
struct ErrorEnvelope {
    detail: ErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Object { error: String },
    Text(String),
}

impl TavilyError {
    /// Determines if this error is retryable
    ///
    /// Retryable errors include rate limits (429), timeouts (408),
    /// and server errors (5xx).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(obj) => obj
                .status_code
                .is_some_and(crate::retry::is_retryable_status),
            Self::Reqwest(e) => e.is_timeout() || e.is_connect(),
            Self::Config(_) | Self::Serde(_) | Self::InvalidRequest(_) => false,
        }
    }

    /// True when Tavily refused the call because credits ran out (432/433).
    #[must_use]
    pub fn is_plan_limit(&self) -> bool {
        matches!(
            self,
            Self::Api(ApiErrorObject { status_code: Some(code), .. })
                if crate::retry::is_plan_limit_status(*code)
        )
    }
}

/// Maps a serde deserialization error to a `TavilyError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> TavilyError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    TavilyError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the Tavily error envelope, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> TavilyError {
    let status_code = Some(status.as_u16());

    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        let message = match envelope.detail {
            ErrorDetail::Object { error } | ErrorDetail::Text(error) => error,
        };
        return TavilyError::Api(ApiErrorObject {
            status_code,
            message,
        });
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    TavilyError::Api(ApiErrorObject {
        status_code,
        message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(err: TavilyError) -> ApiErrorObject {
        match err {
            TavilyError::Api(obj) => obj,
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn parses_nested_detail_error() {
        let body = br#"{"detail": {"error": "Unauthorized: missing or invalid API key."}}"#;
        let obj = api(deserialize_api_error(StatusCode::UNAUTHORIZED, body));
        assert_eq!(obj.status_code, Some(401));
        assert_eq!(obj.message, "Unauthorized: missing or invalid API key.");
    }

    #[test]
    fn parses_flat_detail_string() {
        let body = br#"{"detail": "Not Found"}"#;
        let obj = api(deserialize_api_error(StatusCode::NOT_FOUND, body));
        assert_eq!(obj.message, "Not Found");
    }

    #[test]
    fn falls_back_to_capped_plain_text() {
        let body = "x".repeat(1000);
        let obj = api(deserialize_api_error(
            StatusCode::BAD_GATEWAY,
            body.as_bytes(),
        ));
        assert_eq!(obj.status_code, Some(502));
        assert_eq!(obj.message.len(), 400);
    }

    #[test]
    fn retryability_follows_status() {
        let limited = deserialize_api_error(StatusCode::TOO_MANY_REQUESTS, b"slow down");
        assert!(limited.is_retryable());

        let bad = deserialize_api_error(StatusCode::BAD_REQUEST, b"{}");
        assert!(!bad.is_retryable());

        assert!(!TavilyError::Config("missing".into()).is_retryable());
    }

    #[test]
    fn credit_limits_are_flagged() {
        let paygo = deserialize_api_error(
            StatusCode::from_u16(433).unwrap(),
            br#"{"detail": {"error": "This request exceeds the pay-as-you-go limit."}}"#,
        );
        assert!(paygo.is_plan_limit());
        assert!(!paygo.is_retryable());

        let limited = deserialize_api_error(StatusCode::TOO_MANY_REQUESTS, b"slow down");
        assert!(!limited.is_plan_limit());
    }

    #[test]
    fn display_includes_status() {
        let err = deserialize_api_error(StatusCode::UNAUTHORIZED, br#"{"detail": "nope"}"#);
        assert_eq!(err.to_string(), "API error: 401: nope");
    }
}
