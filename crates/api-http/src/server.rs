//! HTTP Server
//!
//! Serves the results and log directories over plain HTTP with permissive CORS.

use crate::handler;
use axum::routing::get;
use axum::Router;
use evalboard_core::application::{CatalogService, LogService};
use evalboard_core::port::{LogStore, ResultStore};
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5005;
const DEFAULT_RESULTS_DIR: &str = "./prompt-results";
const DEFAULT_LOGS_DIR: &str = "./logs";

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    pub results_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
        }
    }
}

impl HttpServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub logs: Arc<LogService>,
}

impl AppState {
    pub fn new(results: Arc<dyn ResultStore>, logs: Arc<dyn LogStore>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(results)),
            logs: Arc::new(LogService::new(logs)),
        }
    }
}

/// Route table
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handler::health))
        .route("/api/models", get(handler::list_models))
        .route("/api/models/:model/files", get(handler::list_files))
        .route("/api/models/:model/files/:file", get(handler::read_file))
        .route("/api/models/:model/latest", get(handler::latest))
        .route("/api/index", get(handler::index))
        .route("/logs", get(handler::list_logs))
        .route("/logs/:file", get(handler::read_log))
        .route("/logs/:file/summary", get(handler::log_summary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(
        config: HttpServerConfig,
        results: Arc<dyn ResultStore>,
        logs: Arc<dyn LogStore>,
    ) -> Self {
        Self {
            config,
            state: AppState::new(results, logs),
        }
    }

    pub fn config(&self) -> &HttpServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start<F>(self, shutdown: F) -> Result<(), String>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), String>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local: SocketAddr = listener.local_addr().map_err(|e| e.to_string())?;
        info!(
            addr = %local,
            results_dir = %self.config.results_dir.display(),
            logs_dir = %self.config.logs_dir.display(),
            "HTTP server listening"
        );

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| format!("HTTP server error: {}", e))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
