//! staffbook CLI - Entry point
//!
//! Opens the database, starts the placeholder HTTP listener, and runs the
//! interactive menu loop until the operator selects Exit.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffbook::cli::{menu, Cli};
use staffbook::config::Config;
use staffbook::core::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("staffbook=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Open the store once; every handler borrows this handle
    let db_path = cli.db.clone().unwrap_or_else(|| config.database_path());
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let store = Store::open(&db_path)?;
    tracing::debug!("database at {}", db_path.display());

    // Placeholder HTTP listener; a bind failure must not stop the menu loop
    if config.server.enabled && !cli.no_server {
        let port = cli.port.unwrap_or(config.server.port);
        tokio::spawn(async move {
            if let Err(e) = staffbook::server::serve(port).await {
                tracing::warn!("HTTP listener stopped: {e:#}");
            }
        });
    }

    // Prompts are synchronous; keep them off the async workers
    tokio::task::spawn_blocking(move || menu::run(&store)).await??;

    Ok(())
}
