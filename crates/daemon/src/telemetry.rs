//! Logging setup
//!
//! Console output is pretty or JSON. When `EVALBOARD_LOG_DIR` is set, a
//! daily rolling JSON file receives the same events.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const DEFAULT_FILTER: &str = "evalboard=info,tower_http=info";
const LOG_FILE_PREFIX: &str = "evalboard-server.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` selects JSON; anything else is pretty
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `evalboard=info,tower_http=info`)
/// - `EVALBOARD_LOG_FORMAT`: `json` or `pretty`
/// - `EVALBOARD_LOG_DIR`: directory for the rolling log file
///
/// The returned guard flushes the file writer and must live until exit.
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")?;

    let format = LogFormat::parse(std::env::var("EVALBOARD_LOG_FORMAT").ok().as_deref());

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    layers.push(match format {
        // Production: JSON structured logging
        LogFormat::Json => fmt::layer().json().boxed(),
        // Development: Pretty formatting with colors
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    });

    let mut guard = None;
    if let Some(dir) = std::env::var("EVALBOARD_LOG_DIR").ok().filter(|d| !d.is_empty()) {
        let dir = shellexpand::tilde(&dir).into_owned();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory {}", dir))?;

        let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
        let (writer, file_guard) = tracing_appender::non_blocking(appender);
        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        );
        guard = Some(file_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" JSON ")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("xml")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
    }
}
