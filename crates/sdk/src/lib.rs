//! Evalboard SDK - Rust Client Library
//!
//! Clients for the evalboard server, its static mirror and the BigCodeBench
//! leaderboard, plus mirror-first source selection.
//!
//! # Example
//!
//! ```no_run
//! use evalboard_sdk::{
//!     load_runs, select_source, DashboardClient, DataSource, LoadMode, MirrorClient,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let local = Arc::new(DashboardClient::connect("http://localhost:5005")?);
//!     let mirror: Arc<dyn DataSource> =
//!         Arc::new(MirrorClient::new("https://example.org/evalboard", None)?);
//!
//!     // Mirror first, local server as fallback
//!     let source = select_source(Some(mirror), local).await?;
//!     let models = source.list_models().await?;
//!
//!     for loaded in load_runs(source.as_ref(), &models, LoadMode::Latest).await {
//!         println!("{}: {} exchanges", loaded.model, loaded.run.prompt.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;
mod leaderboard;
mod mirror;
mod source;
mod types;

pub use client::DashboardClient;
pub use error::{Result, SdkError};
pub use leaderboard::LeaderboardClient;
pub use mirror::MirrorClient;
pub use source::{load_runs, select_source, DataSource};
pub use types::{HealthStatus, LatestResult, LoadMode, LoadedRun, SourceKind};
