//! End-to-end query orchestration.
//!
//! One pass per request: semantic analysis → query expansion → retrieval →
//! verse extraction → adaptive filtering → theme clustering → response
//! assembly. Every request carries a fresh correlation id; stage failures
//! are wrapped into a [`PipelineError`] with the stage's kind code.

use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

use crate::cluster::cluster_verses;
use crate::error::{ErrorKind, PipelineError};
use crate::expand::{build_search_text, QueryExpander};
use crate::extract::extract_verses;
use crate::filter::filter_verses;
use crate::models::{ExpansionSummary, QueryRequest, QueryResponse, ResponseMetadata};
use crate::retrieval;
use crate::semantics;
use crate::state::AppState;

/// Version tag stamped into every response's metadata.
pub const COLLECTOR_VERSION: &str = "v2.0-rust";

pub async fn process_query(
    state: &AppState,
    request: QueryRequest,
) -> Result<QueryResponse, PipelineError> {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let question = request.question.trim().to_string();

    tracing::info!(%correlation_id, "Processing query: {question}");

    let semantics = semantics::analyze(&question, &request.context);
    tracing::debug!(
        %correlation_id,
        "Semantic analysis: {} themes, {} concepts, {} entities",
        semantics.themes.len(),
        semantics.concepts.len(),
        semantics.entities.len()
    );

    let expander = QueryExpander::new(&state.lexicon);
    let expanded = expander.expand(&question, &semantics);
    let search_text = build_search_text(&expanded);

    let payload = retrieval::search(&state.http_client, &state.config.retrieval, &search_text)
        .await
        .map_err(|e| PipelineError::new(ErrorKind::RetrievalFailed, correlation_id, e))?;

    let extracted = extract_verses(&payload, &semantics, &expanded, &state.embeddings);
    let outcome = filter_verses(extracted, expanded.is_targeted);
    let clusters = cluster_verses(&outcome.verses);

    let total_verses = outcome.verses.len();
    let total_clusters = clusters.len();
    let processing_time_ms = started.elapsed().as_millis() as u64;

    tracing::info!(
        %correlation_id,
        "Query complete: {total_clusters} clusters, {total_verses} verses, \
         {} dropped, {processing_time_ms}ms",
        outcome.dropped
    );

    let expansion = request.options.include_expansion.then(|| ExpansionSummary {
        expansion_count: expanded.expansion_count,
        is_targeted: expanded.is_targeted,
        sources: expanded.expansion_sources.clone(),
    });

    Ok(QueryResponse {
        question,
        clusters,
        metadata: ResponseMetadata {
            total_clusters,
            total_verses,
            processing_time_ms,
            correlation_id,
            collection_time: Utc::now(),
            collector_version: COLLECTOR_VERSION.to_string(),
            expansion,
        },
    })
}
