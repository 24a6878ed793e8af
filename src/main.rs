use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use shastra_search::api;
use shastra_search::config::Config;
use shastra_search::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();

    if config.retrieval.base_url.is_none() {
        tracing::warn!("RETRIEVAL_BASE_URL is not set, queries will fail until it is");
    }

    let state = AppState::new(config)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!("Listening on {bind_addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
