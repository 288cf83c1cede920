//! HTTP API Layer
//!
//! Read-only REST endpoints over the results and log directories.

pub mod error;
pub mod extract;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{router, AppState, HttpServer, HttpServerConfig};
