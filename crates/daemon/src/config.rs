//! Daemon configuration from environment variables

use evalboard_api_http::HttpServerConfig;
use std::path::PathBuf;
use tracing::warn;

pub const ENV_HOST: &str = "EVALBOARD_HOST";
pub const ENV_PORT: &str = "EVALBOARD_PORT";
pub const ENV_PORT_FALLBACK: &str = "PORT";
pub const ENV_RESULTS_DIR: &str = "EVALBOARD_RESULTS_DIR";
pub const ENV_LOGS_DIR: &str = "EVALBOARD_LOGS_DIR";

/// Build the server configuration from the process environment
pub fn from_env() -> HttpServerConfig {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the server configuration from any key lookup
///
/// Unset or empty values keep the defaults. Unparseable ports are logged
/// and replaced by the default.
pub fn from_lookup<F>(lookup: F) -> HttpServerConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = HttpServerConfig::default();

    if let Some(host) = get(ENV_HOST) {
        config.host = host.trim().to_string();
    }

    let port = get(ENV_PORT)
        .map(|v| (ENV_PORT, v))
        .or_else(|| get(ENV_PORT_FALLBACK).map(|v| (ENV_PORT_FALLBACK, v)));
    if let Some((key, raw)) = port {
        match raw.trim().parse::<u16>() {
            Ok(p) => config.port = p,
            Err(e) => warn!(
                variable = key,
                value = %raw,
                error = %e,
                default = config.port,
                "Invalid port, using default"
            ),
        }
    }

    if let Some(dir) = get(ENV_RESULTS_DIR) {
        config.results_dir = expand(&dir);
    }
    if let Some(dir) = get(ENV_LOGS_DIR) {
        config.logs_dir = expand(&dir);
    }

    config
}

fn expand(path: &str) -> PathBuf {
    shellexpand::tilde(path.trim()).into_owned().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = from_lookup(lookup(&[]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5005);
        assert_eq!(config.results_dir, PathBuf::from("./prompt-results"));
        assert_eq!(config.logs_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn test_port_precedence() {
        let config = from_lookup(lookup(&[("EVALBOARD_PORT", "8080"), ("PORT", "9090")]));
        assert_eq!(config.port, 8080);

        let config = from_lookup(lookup(&[("PORT", "9090")]));
        assert_eq!(config.port, 9090);

        let config = from_lookup(lookup(&[("EVALBOARD_PORT", ""), ("PORT", "9090")]));
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = from_lookup(lookup(&[("EVALBOARD_PORT", "not-a-port")]));
        assert_eq!(config.port, 5005);
    }

    #[test]
    fn test_paths_and_host() {
        let config = from_lookup(lookup(&[
            ("EVALBOARD_HOST", "0.0.0.0"),
            ("EVALBOARD_RESULTS_DIR", "/data/prompt-results"),
            ("EVALBOARD_LOGS_DIR", "~/logs"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.results_dir, PathBuf::from("/data/prompt-results"));
        assert!(config.logs_dir.ends_with("logs"));
    }
}
