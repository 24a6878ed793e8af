//! HTTP surface: query endpoint plus health and lexicon introspection.

pub mod query;
pub mod status;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/query", post(query::handle_query))
        .route("/api/health", get(status::health))
        .route("/api/lexicon/stats", get(status::lexicon_stats))
        .with_state(state)
}
