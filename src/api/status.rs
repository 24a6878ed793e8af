//! Health and lexicon introspection endpoints.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::lexicon::LexiconStats;
use crate::pipeline::COLLECTOR_VERSION;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": COLLECTOR_VERSION,
        "lexiconTerms": state.lexicon.len(),
        "retrievalConfigured": state.config.retrieval.base_url.is_some(),
    }))
}

/// GET /api/lexicon/stats
pub async fn lexicon_stats(State(state): State<AppState>) -> Json<LexiconStats> {
    Json(state.lexicon.stats().clone())
}
