//! BigCodeBench leaderboard client

use crate::error::{Result, SdkError};
use crate::http::{build_client, get_json, parse_base};
use evalboard_core::application::{
    entries_from_rows, rank_leaderboard, LeaderboardRow, LeaderboardSplit, DATASETS_SERVER_URL,
};
use reqwest::{Client, Url};
use tracing::debug;

pub struct LeaderboardClient {
    client: Client,
    server: Url,
}

impl LeaderboardClient {
    /// Client for the public Hugging Face datasets-server
    pub fn new() -> Result<Self> {
        Self::with_server(DATASETS_SERVER_URL)
    }

    /// Client for another datasets-server deployment
    pub fn with_server(url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            server: parse_base(url.as_ref())?,
        })
    }

    /// Ranked rows of one split (first 100 dataset rows)
    pub async fn fetch(&self, split: LeaderboardSplit) -> Result<Vec<LeaderboardRow>> {
        let url = split.rows_url(self.server.as_str());
        debug!(url = %url, split = split.title(), "Fetching leaderboard");

        let value: serde_json::Value = get_json(&self.client, parse_url(&url)?).await?;
        let entries = entries_from_rows(value)?;
        Ok(rank_leaderboard(entries))
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| SdkError::InvalidUrl(format!("{}: {}", url, e)))
}
