//! Data-driven term-embedding table.
//!
//! Hand-authored 10-dimensional vectors for core Sanskrit terms and their
//! English glosses, loaded from `resources/term_embeddings.json`. The table
//! is injected through [`crate::state::AppState`] so tests and deployments
//! can swap it without code changes.

use anyhow::{Context, Result};
use std::collections::HashMap;

/// Dimension every vector in the table must have.
pub const EMBEDDING_DIM: usize = 10;

const BUNDLED_TABLE: &str = include_str!("../../resources/term_embeddings.json");

pub struct EmbeddingTable {
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingTable {
    /// Parse a `{term: [f32; 10]}` JSON map. Keys are normalized to
    /// lowercase; vectors with the wrong dimension are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<f32>> =
            serde_json::from_str(json).context("Failed to parse embedding table JSON")?;

        let mut vectors = HashMap::with_capacity(raw.len());
        for (term, vector) in raw {
            anyhow::ensure!(
                vector.len() == EMBEDDING_DIM,
                "Embedding for '{term}' has {} dimensions, expected {EMBEDDING_DIM}",
                vector.len()
            );
            vectors.insert(term.to_lowercase(), vector);
        }

        Ok(Self { vectors })
    }

    /// The table shipped with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_TABLE)
    }

    pub fn get(&self, term: &str) -> Option<&[f32]> {
        self.vectors.get(&term.to_lowercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Cosine similarity between two vectors. Zero-norm or mismatched inputs
/// score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for i in 0..a.len() {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
