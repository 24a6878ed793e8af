//! The query endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ErrorKind;
use crate::models::{QueryRequest, QueryResponse};
use crate::pipeline;
use crate::state::AppState;

/// POST /api/query
///
/// Runs the full pipeline. The error body carries only the stage kind code
/// and correlation id; the underlying cause stays in the server log.
pub async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, (StatusCode, Json<Value>)> {
    if request.question.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "question must not be empty"})),
        ));
    }

    match pipeline::process_query(&state, request).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            tracing::error!(
                correlation_id = %err.correlation_id,
                "Pipeline failed at {}: {:#}",
                err.kind.code(),
                err.cause
            );
            let status = match err.kind {
                ErrorKind::RetrievalFailed => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((
                status,
                Json(json!({
                    "error": err.kind.code(),
                    "correlationId": err.correlation_id,
                })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_empty_question_is_bad_request() {
        let state = AppState::new(Config::default()).unwrap();
        let request: QueryRequest = serde_json::from_str(r#"{"question": "   "}"#).unwrap();

        let (status, body) = handle_query(State(state), Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_retrieval_failure_is_bad_gateway_with_kind_code() {
        // No retrieval endpoint configured
        let state = AppState::new(Config::default()).unwrap();
        let request: QueryRequest =
            serde_json::from_str(r#"{"question": "what is dharma"}"#).unwrap();

        let (status, body) = handle_query(State(state), Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.0["error"], "RETRIEVAL_FAILED");
        assert!(body.0["correlationId"].is_string());
        // Cause detail must not leak into the body
        assert!(body.0.get("cause").is_none());
    }
}
