//! Placeholder HTTP listener
//!
//! Binds the configured port and answers every request with 404; no routes
//! are registered. Runs as a spawned task beside the menu loop.

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

pub async fn serve(port: u16) -> Result<()> {
    // A router with no routes 404s everything, request body included
    let app = Router::new();

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind HTTP listener on port {port}"))?;
    tracing::info!("HTTP listener on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .context("HTTP listener failed")?;

    Ok(())
}
