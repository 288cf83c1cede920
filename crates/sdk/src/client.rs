//! Evalboard Server Client Implementation

use crate::error::Result;
use crate::http::{build_client, endpoint, get_json, get_text, parse_base};
use crate::source::DataSource;
use crate::types::{HealthStatus, LatestResult, SourceKind};
use async_trait::async_trait;
use evalboard_core::application::{LogSummary, ResultIndex};
use evalboard_core::domain::ResultDocument;
use reqwest::{Client, Url};

/// Evalboard Server Client
///
/// One method per route of the evalboard server.
///
/// # Example
///
/// ```no_run
/// use evalboard_sdk::DashboardClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DashboardClient::connect("http://localhost:5005")?;
/// for model in client.list_models().await? {
///     println!("{}", model);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DashboardClient {
    client: Client,
    base: Url,
}

impl DashboardClient {
    /// Create a client for a server base URL
    ///
    /// # Arguments
    ///
    /// * `url` - server URL (e.g., `http://localhost:5005`)
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base: parse_base(url.as_ref())?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        endpoint(&self.base, segments)
    }

    /// GET /healthz
    pub async fn health(&self) -> Result<HealthStatus> {
        get_json(&self.client, self.url(&["healthz"])?).await
    }

    /// GET /api/models
    pub async fn list_models(&self) -> Result<Vec<String>> {
        get_json(&self.client, self.url(&["api", "models"])?).await
    }

    /// GET /api/models/:model/files
    pub async fn list_files(&self, model: &str) -> Result<Vec<String>> {
        get_json(&self.client, self.url(&["api", "models", model, "files"])?).await
    }

    /// GET /api/models/:model/files/:file, as raw JSON
    pub async fn get_file(&self, model: &str, file: &str) -> Result<serde_json::Value> {
        get_json(
            &self.client,
            self.url(&["api", "models", model, "files", file])?,
        )
        .await
    }

    /// GET /api/models/:model/files/:file, as a result document
    pub async fn get_document(&self, model: &str, file: &str) -> Result<ResultDocument> {
        let value = self.get_file(model, file).await?;
        Ok(ResultDocument::from_value(value)?)
    }

    /// GET /api/models/:model/latest
    pub async fn latest(&self, model: &str) -> Result<LatestResult> {
        get_json(&self.client, self.url(&["api", "models", model, "latest"])?).await
    }

    /// GET /api/index
    pub async fn index(&self) -> Result<ResultIndex> {
        get_json(&self.client, self.url(&["api", "index"])?).await
    }

    /// GET /logs
    pub async fn list_logs(&self) -> Result<Vec<String>> {
        get_json(&self.client, self.url(&["logs"])?).await
    }

    /// GET /logs/:file
    ///
    /// # Arguments
    ///
    /// * `file` - log file name
    /// * `tail` - last N lines only
    /// * `search` - lines containing this text only
    pub async fn read_log(
        &self,
        file: &str,
        tail: Option<usize>,
        search: Option<&str>,
    ) -> Result<String> {
        let mut url = self.url(&["logs", file])?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(n) = tail {
                query.append_pair("tail", &n.to_string());
            }
            if let Some(term) = search.filter(|t| !t.is_empty()) {
                query.append_pair("search", term);
            }
        }
        // An empty query would leave a trailing `?`
        if url.query() == Some("") {
            url.set_query(None);
        }
        get_text(&self.client, url).await
    }

    /// GET /logs/:file/summary
    pub async fn log_summary(&self, file: &str) -> Result<LogSummary> {
        get_json(&self.client, self.url(&["logs", file, "summary"])?).await
    }
}

#[async_trait]
impl DataSource for DashboardClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Local
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        DashboardClient::list_models(self).await
    }

    async fn list_result_files(&self, model: &str) -> Result<Vec<String>> {
        self.list_files(model).await
    }

    async fn fetch_document(&self, model: &str, file: &str) -> Result<ResultDocument> {
        self.get_document(model, file).await
    }

    async fn list_logs(&self) -> Result<Vec<String>> {
        DashboardClient::list_logs(self).await
    }

    async fn fetch_log(&self, name: &str) -> Result<String> {
        self.read_log(name, None, None).await
    }
}
