//! Shared application state handed to every request handler.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::lexicon::Lexicon;
use crate::scoring::EmbeddingTable;

/// Everything a request needs: configuration, the immutable lexicon, the
/// embedding table, and a shared HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub lexicon: Arc<Lexicon>,
    pub embeddings: Arc<EmbeddingTable>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let lexicon = Lexicon::load(&config.lexicon);
        tracing::info!("Lexicon ready with {} terms", lexicon.len());

        let embeddings =
            EmbeddingTable::bundled().context("Failed to load bundled embedding table")?;

        // The per-request timeout is applied at the call site; this outer
        // timeout is a backstop above the 30s request cap.
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(35))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            lexicon: Arc::new(lexicon),
            embeddings: Arc::new(embeddings),
            http_client,
        })
    }

    /// State with an injected lexicon, for tests that need known entries.
    #[cfg(test)]
    pub fn with_lexicon(config: Config, lexicon: Lexicon) -> Result<Self> {
        let mut state = Self::new(config)?;
        state.lexicon = Arc::new(lexicon);
        Ok(state)
    }
}
