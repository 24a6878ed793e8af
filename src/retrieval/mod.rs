//! Boundary to the hosted search/answer service.
//!
//! One POST per request carrying the expanded query text and an
//! answer-generation spec; the response is kept as raw JSON and classified
//! into one of three shapes for the extractor. The 30s timeout is the only
//! retry-free suspension point of the pipeline.

pub mod payload;

use serde::Serialize;
use std::time::Duration;

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
pub use payload::{PayloadShape, RawPayload};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: QueryBody<'a>,
    answer_generation_spec: AnswerGenerationSpec<'a>,
}

#[derive(Serialize)]
struct QueryBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerGenerationSpec<'a> {
    include_citations: bool,
    prompt_spec: PromptSpec<'a>,
}

#[derive(Serialize)]
struct PromptSpec<'a> {
    preamble: &'a str,
}

/// Send the expanded query to the search/answer service.
pub async fn search(
    client: &reqwest::Client,
    config: &RetrievalConfig,
    text: &str,
) -> Result<RawPayload, RetrievalError> {
    let url = config.base_url.as_deref().ok_or(RetrievalError::Config)?;
    let timeout_secs = config.timeout_secs.min(30);

    let body = SearchRequest {
        query: QueryBody { text },
        answer_generation_spec: AnswerGenerationSpec {
            include_citations: config.include_citations,
            prompt_spec: PromptSpec {
                preamble: &config.preamble,
            },
        },
    };

    let mut request = client
        .post(url)
        .timeout(Duration::from_secs(timeout_secs))
        .json(&body);
    if let Some(key) = config.api_key.as_deref() {
        request = request.header("Authorization", format!("Bearer {key}"));
    }

    let resp = request.send().await.map_err(|e| {
        if e.is_timeout() {
            RetrievalError::Timeout(timeout_secs)
        } else {
            RetrievalError::Network(e)
        }
    })?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(RetrievalError::Service { status, body });
    }

    let value: serde_json::Value = resp.json().await.map_err(RetrievalError::Decode)?;
    tracing::debug!("Retrieval payload received ({} bytes est.)", value.to_string().len());
    Ok(RawPayload(value))
}
