//! Evalboard Server - Main Entry Point
//! Read-only HTTP API over the prompt-results and logs directories

mod config;
mod telemetry;

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

// Import workspace crates
use evalboard_api_http::HttpServer;
use evalboard_infra_fs::{FsLogStore, FsResultStore};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let _log_guard = telemetry::init_logging()?;

    info!("Evalboard server v{} starting...", VERSION);

    // 2. Load configuration
    let config = config::from_env();

    if !config.results_dir.is_dir() {
        warn!(
            results_dir = %config.results_dir.display(),
            "Results directory does not exist yet; /api/models will fail until it is created"
        );
    }

    // 3. Setup dependencies (DI wiring)
    let results = Arc::new(FsResultStore::new(config.results_dir.clone()));
    let logs = Arc::new(FsLogStore::new(config.logs_dir.clone()));

    // 4. Start HTTP server
    info!(
        url = %format!("http://{}", config.addr()),
        "Server running"
    );
    info!("Press Ctrl+C to shutdown");

    let server = HttpServer::new(config, results, logs);
    server
        .start(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))?;

    info!("Shutdown complete.");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received. Exiting gracefully..."),
        Err(e) => {
            // Without a signal handler the server runs until killed
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
