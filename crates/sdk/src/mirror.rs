//! Static mirror client
//!
//! Layout of a mirror:
//! - `<base>/prompt-results/index.json`
//! - `<base>/prompt-results/<model>/<file>`
//! - `<base>/code-assist-data.json`
//! - `<logs_base>/logs.json` and `<logs_base>/<file>`

use crate::error::{Result, SdkError};
use crate::http::{build_client, endpoint, get_json, get_text, parse_base};
use crate::source::DataSource;
use crate::types::SourceKind;
use async_trait::async_trait;
use evalboard_core::application::index::INDEX_FILE_NAME;
use evalboard_core::application::{ResultIndex, ScoreBoard};
use evalboard_core::domain::result_file::base_name;
use evalboard_core::domain::ResultDocument;
use reqwest::{Client, Url};
use tokio::sync::OnceCell;
use tracing::debug;

const RESULTS_DIR: &str = "prompt-results";
const SCORES_FILE: &str = "code-assist-data.json";
const LOGS_DIR: &str = "logs";
const LOG_LISTING_FILE: &str = "logs.json";

pub struct MirrorClient {
    client: Client,
    base: Url,
    logs_base: Url,
    index: OnceCell<ResultIndex>,
}

impl MirrorClient {
    /// # Arguments
    ///
    /// * `base` - mirror root holding `prompt-results/`
    /// * `logs_base` - log location; defaults to `<base>/logs`
    pub fn new(base: impl AsRef<str>, logs_base: Option<&str>) -> Result<Self> {
        let base = parse_base(base.as_ref())?;
        let logs_base = match logs_base {
            Some(url) => parse_base(url)?,
            None => parse_base(endpoint(&base, &[LOGS_DIR])?.as_str())?,
        };

        Ok(Self {
            client: build_client()?,
            base,
            logs_base,
            index: OnceCell::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `prompt-results/index.json`, fetched once per client
    pub async fn index(&self) -> Result<&ResultIndex> {
        self.index
            .get_or_try_init(|| async {
                let url = endpoint(&self.base, &[RESULTS_DIR, INDEX_FILE_NAME])?;
                let index: ResultIndex = get_json(&self.client, url).await?;
                debug!(models = index.len(), "Mirror index loaded");
                Ok::<_, SdkError>(index)
            })
            .await
    }

    /// Raw result file by index path (`model/file`)
    pub async fn fetch_result(&self, path: &str) -> Result<serde_json::Value> {
        let mut segments = vec![RESULTS_DIR];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        get_json(&self.client, endpoint(&self.base, &segments)?).await
    }

    /// Pass@1 scores from `code-assist-data.json`
    pub async fn scores(&self) -> Result<ScoreBoard> {
        let value: serde_json::Value =
            get_json(&self.client, endpoint(&self.base, &[SCORES_FILE])?).await?;
        Ok(ScoreBoard::from_code_assist_data(&value))
    }
}

#[async_trait]
impl DataSource for MirrorClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Mirror
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(self.index().await?.keys().cloned().collect())
    }

    async fn list_result_files(&self, model: &str) -> Result<Vec<String>> {
        let index = self.index().await?;
        Ok(index
            .get(model)
            .map(|paths| paths.iter().map(|p| base_name(p).to_string()).collect())
            .unwrap_or_default())
    }

    async fn fetch_document(&self, model: &str, file: &str) -> Result<ResultDocument> {
        let value = self.fetch_result(&format!("{}/{}", model, file)).await?;
        Ok(ResultDocument::from_value(value)?)
    }

    async fn list_logs(&self) -> Result<Vec<String>> {
        get_json(
            &self.client,
            endpoint(&self.logs_base, &[LOG_LISTING_FILE])?,
        )
        .await
    }

    async fn fetch_log(&self, name: &str) -> Result<String> {
        get_text(&self.client, endpoint(&self.logs_base, &[name])?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const INDEX: &str = r#"{
        "granite3.1:8b": [
            "granite3.1:8b/granite3.1:8b_20250302T101520.json",
            "granite3.1:8b/granite3.1:8b_20250101T000000.json"
        ]
    }"#;

    #[tokio::test]
    async fn test_index_fetched_once() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/prompt-results/index.json")
            .with_body(INDEX)
            .expect(1)
            .create_async()
            .await;

        let mirror = MirrorClient::new(server.url(), None).unwrap();
        assert_eq!(mirror.list_models().await.unwrap(), vec!["granite3.1:8b"]);
        assert_eq!(
            mirror.list_result_files("granite3.1:8b").await.unwrap(),
            vec![
                "granite3.1:8b_20250302T101520.json",
                "granite3.1:8b_20250101T000000.json"
            ]
        );
        assert!(mirror.list_result_files("other").await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_document_by_path() {
        let mut server = Server::new_async().await;
        server
            .mock(
                "GET",
                "/prompt-results/granite3.1:8b/granite3.1:8b_20250302T101520.json",
            )
            .with_body(r#"{"0":[{"name":"granite3.1:8b","prompt":[]}]}"#)
            .create_async()
            .await;

        let mirror = MirrorClient::new(server.url(), None).unwrap();
        let doc = mirror
            .fetch_document("granite3.1:8b", "granite3.1:8b_20250302T101520.json")
            .await
            .unwrap();
        assert_eq!(doc.runs().next().unwrap().name, "granite3.1:8b");
    }

    #[tokio::test]
    async fn test_scores() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/code-assist-data.json")
            .with_body(r#"{"g":[{"Name":"granite3.1:8b","Data":[{"Pass@1":"0.5"}]}]}"#)
            .create_async()
            .await;

        let mirror = MirrorClient::new(server.url(), None).unwrap();
        let board = mirror.scores().await.unwrap();
        assert_eq!(board.display("granite3.1:8b"), "50.0%");
    }

    #[tokio::test]
    async fn test_logs_default_and_custom_base() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/logs/logs.json")
            .with_body(r#"["ollama_server_20250302_101520.log"]"#)
            .create_async()
            .await;
        server
            .mock("GET", "/gh-pages/logs/ollama_server_20250302_101520.log")
            .with_body("hello")
            .create_async()
            .await;

        let mirror = MirrorClient::new(server.url(), None).unwrap();
        assert_eq!(
            mirror.list_logs().await.unwrap(),
            vec!["ollama_server_20250302_101520.log"]
        );

        let custom = format!("{}/gh-pages/logs", server.url());
        let mirror = MirrorClient::new(server.url(), Some(&custom)).unwrap();
        assert_eq!(
            mirror
                .fetch_log("ollama_server_20250302_101520.log")
                .await
                .unwrap(),
            "hello"
        );
    }

    #[tokio::test]
    async fn test_missing_index_is_http_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/prompt-results/index.json")
            .with_status(404)
            .with_body("404: Not Found")
            .create_async()
            .await;

        let mirror = MirrorClient::new(server.url(), None).unwrap();
        let err = mirror.list_models().await.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, SdkError::Http { .. }));
    }
}
