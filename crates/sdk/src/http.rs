//! Shared reqwest plumbing

use crate::error::{Result, SdkError};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| SdkError::Transport(format!("Failed to create client: {}", e)))
}

/// Parse a base URL; a trailing slash is added so relative joins keep the path
pub(crate) fn parse_base(url: &str) -> Result<Url> {
    let trimmed = url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let parsed =
        Url::parse(&with_slash).map_err(|e| SdkError::InvalidUrl(format!("{}: {}", url, e)))?;
    if parsed.cannot_be_a_base() {
        return Err(SdkError::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}

/// `base` extended with percent-encoded path segments
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| SdkError::InvalidUrl(base.to_string()))?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Ok(url)
}

async fn send(client: &Client, url: Url) -> Result<reqwest::Response> {
    debug!(url = %url, "GET");
    let response = client.get(url).send().await?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Server errors carry {"error": "..."}; anything else is passed through as text
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            }
        });

    Err(SdkError::Http {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T> {
    let text = send(client, url).await?.text().await?;
    Ok(serde_json::from_str(&text)?)
}

pub(crate) async fn get_text(client: &Client, url: Url) -> Result<String> {
    Ok(send(client, url).await?.text().await?)
}
