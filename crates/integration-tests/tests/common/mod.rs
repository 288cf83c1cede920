//! Shared fixtures: a results/logs tree on disk and a server over it

#![allow(dead_code)]

use evalboard_api_http::{HttpServer, HttpServerConfig};
use evalboard_infra_fs::{FsLogStore, FsResultStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const GRANITE: &str = "granite3.1:8b";
pub const GPT: &str = "gpt-4o";
pub const SERVER_LOG: &str = "ollama_server_20250302_101520.log";

pub const LOG_TEXT: &str = "\
time=2025-03-02T10:15:20.000+01:00 level=INFO msg=\"Listening on 127.0.0.1:11434 (version 0.5.7)\"
time=2025-03-02T10:15:21.000+01:00 level=WARN msg=\"no compatible GPUs were discovered\"
llama_perf_context_print:       total time =    1500.00 ms /   210 tokens
time=2025-03-02T10:16:00.000+01:00 level=ERROR msg=\"request failed\"
llama_perf_context_print:       total time =     500.00 ms /    80 tokens";

pub fn run_json(model: &str, date: &str, question: &str) -> String {
    serde_json::json!({
        "0": [{
            "name": model,
            "date": date,
            "file_name": format!("{}_{}.json", model, date),
            "total_time": 1200.0,
            "prompt": [
                { "user": question, "assistant": "```rust\nfn main() {}\n```", "time": 1200.0 }
            ]
        }]
    })
    .to_string()
}

/// Temp tree with `prompt-results/` and `logs/`
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        std::fs::create_dir_all(fixture.results_dir()).unwrap();
        std::fs::create_dir_all(fixture.logs_dir()).unwrap();
        fixture
    }

    /// Two granite runs, one gpt-4o run, one broken file and a server log
    pub fn populated() -> Self {
        let fixture = Self::new();
        fixture.add_result(GRANITE, "20250101T000000", "old question");
        fixture.add_result(GRANITE, "20250302T101520", "new question");
        fixture.add_result(GPT, "20250215T083000", "gpt question");
        fixture.write_result_file(GPT, "gpt-4o_20240101T000000.json", "{not json");
        fixture.write_result_file(GPT, "notes.txt", "ignored");
        std::fs::write(fixture.logs_dir().join(SERVER_LOG), LOG_TEXT).unwrap();
        std::fs::write(fixture.logs_dir().join("logs.json"), "[]").unwrap();
        fixture
    }

    pub fn results_dir(&self) -> PathBuf {
        self.dir.path().join("prompt-results")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.dir.path().join("logs")
    }

    pub fn add_result(&self, model: &str, date: &str, question: &str) {
        let file = format!("{}_{}.json", model, date);
        self.write_result_file(model, &file, &run_json(model, date, question));
    }

    pub fn write_result_file(&self, model: &str, file: &str, body: &str) {
        let dir = self.results_dir().join(model);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(file), body).unwrap();
    }
}

/// Running server; dropping it stops the server
pub struct RunningServer {
    pub base_url: String,
    _stop: oneshot::Sender<()>,
}

pub async fn spawn_server(results_dir: &Path, logs_dir: &Path) -> RunningServer {
    let config = HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        results_dir: results_dir.to_path_buf(),
        logs_dir: logs_dir.to_path_buf(),
    };
    let server = HttpServer::new(
        config,
        Arc::new(FsResultStore::new(results_dir)),
        Arc::new(FsLogStore::new(logs_dir)),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(server.serve(listener, async move {
        let _ = rx.await;
    }));

    RunningServer {
        base_url,
        _stop: tx,
    }
}
