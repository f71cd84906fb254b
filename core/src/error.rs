//! Error types for the todo store and the todo API client.
//!
//! # Design
//! `StoreError` is what the in-memory store reports; the HTTP layer maps it
//! onto status codes. `ClientError` is the client-side view of a response:
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status". All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging.

use thiserror::Error;

use crate::types::TaskId;

/// Errors returned by `TodoStore` and request validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required field is missing or empty, or a path id is not a positive
    /// integer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No todo with this id exists.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
