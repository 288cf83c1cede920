//! End-to-end tests: filesystem stores behind the HTTP server, read via the SDK

mod common;

use common::{spawn_server, Fixture, GPT, GRANITE, SERVER_LOG};
use evalboard_sdk::{load_runs, DashboardClient, LoadMode, SdkError};

#[tokio::test]
async fn test_browse_models_and_files() {
    let fixture = Fixture::populated();
    let server = spawn_server(&fixture.results_dir(), &fixture.logs_dir()).await;
    let client = DashboardClient::connect(&server.base_url).unwrap();

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");

    assert_eq!(client.list_models().await.unwrap(), vec![GPT, GRANITE]);

    let files = client.list_files(GRANITE).await.unwrap();
    assert_eq!(
        files,
        vec![
            "granite3.1:8b_20250101T000000.json",
            "granite3.1:8b_20250302T101520.json"
        ]
    );

    // Non-JSON files are not listed
    let files = client.list_files(GPT).await.unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.ends_with(".json")));
}

#[tokio::test]
async fn test_latest_picks_newest_timestamp() {
    let fixture = Fixture::populated();
    let server = spawn_server(&fixture.results_dir(), &fixture.logs_dir()).await;
    let client = DashboardClient::connect(&server.base_url).unwrap();

    let latest = client.latest(GRANITE).await.unwrap();
    assert_eq!(latest.file_name, "granite3.1:8b_20250302T101520.json");

    let run = latest.document.runs().next().unwrap();
    assert_eq!(run.prompt[0].user, "new question");
    assert_eq!(run.created_at().unwrap().to_string(), "20250302T101520");
}

#[tokio::test]
async fn test_error_statuses() {
    let fixture = Fixture::populated();
    let server = spawn_server(&fixture.results_dir(), &fixture.logs_dir()).await;
    let client = DashboardClient::connect(&server.base_url).unwrap();

    let err = client.list_files("missing-model").await.unwrap_err();
    assert!(err.is_not_found());

    let err = client
        .get_file(GPT, "gpt-4o_20240101T000000.json")
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Http { status: 500, .. }));

    let err = client.read_log("nope.log", None, None).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_index_over_http() {
    let fixture = Fixture::populated();
    let server = spawn_server(&fixture.results_dir(), &fixture.logs_dir()).await;
    let client = DashboardClient::connect(&server.base_url).unwrap();

    let index = client.index().await.unwrap();
    assert_eq!(
        index.get(GRANITE).unwrap(),
        &vec![
            "granite3.1:8b/granite3.1:8b_20250302T101520.json".to_string(),
            "granite3.1:8b/granite3.1:8b_20250101T000000.json".to_string(),
        ]
    );
    assert!(index.contains_key(GPT));
}

#[tokio::test]
async fn test_logs_listing_view_and_summary() {
    let fixture = Fixture::populated();
    let server = spawn_server(&fixture.results_dir(), &fixture.logs_dir()).await;
    let client = DashboardClient::connect(&server.base_url).unwrap();

    // logs.json is the mirror listing, not a log
    assert_eq!(client.list_logs().await.unwrap(), vec![SERVER_LOG]);

    let tail = client.read_log(SERVER_LOG, Some(1), None).await.unwrap();
    assert!(tail.contains("500.00 ms"));
    assert_eq!(tail.lines().count(), 1);

    let matches = client
        .read_log(SERVER_LOG, Some(1), Some("total time"))
        .await
        .unwrap();
    assert_eq!(
        matches,
        "llama_perf_context_print:       total time =     500.00 ms /    80 tokens"
    );

    let summary = client.log_summary(SERVER_LOG).await.unwrap();
    assert_eq!(summary.lines, 5);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.warnings, 1);
    assert_eq!(summary.version.as_deref(), Some("0.5.7"));
    assert_eq!(summary.mean_response_ms(), Some(1000.0));
}

#[tokio::test]
async fn test_load_runs_through_server() {
    let fixture = Fixture::populated();
    let server = spawn_server(&fixture.results_dir(), &fixture.logs_dir()).await;
    let client = DashboardClient::connect(&server.base_url).unwrap();

    let models = client.list_models().await.unwrap();
    let latest = load_runs(&client, &models, LoadMode::Latest).await;
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].model, GPT);
    assert_eq!(latest[1].file_name, "granite3.1:8b_20250302T101520.json");

    // The broken gpt-4o file fails the whole model in `All` mode
    let all = load_runs(&client, &models, LoadMode::All).await;
    let files: Vec<_> = all.iter().map(|r| r.file_name.as_str()).collect();
    assert_eq!(
        files,
        vec![
            "granite3.1:8b_20250101T000000.json",
            "granite3.1:8b_20250302T101520.json"
        ]
    );
}
