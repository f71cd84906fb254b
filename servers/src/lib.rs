//! Two small HTTP servers on axum.
//!
//! - [`todo`]: in-memory todo API (`/tasks`, `/tasks/{id}`), JSON in and out.
//! - [`echo`]: `POST /submit` replies with `Received data: <body>`.
//!
//! Both read request bodies incrementally through [`body::read_body`] and
//! never let a bad request reach the process level: every failure becomes a
//! status code and a well-formed body.

pub mod body;
pub mod config;
pub mod echo;
pub mod error;
pub mod logging;
pub mod todo;

use thiserror::Error;
use todo_core::StoreError;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to seed store: {0}")]
    Seed(#[from] StoreError),
}

/// Resolves on Ctrl-C so in-flight requests can finish before exit.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
