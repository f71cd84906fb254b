//! HTTP-facing error type for the todo API.
//!
//! Every failure a handler can produce ends up here and is rendered as a
//! status code plus `{"message": "..."}`. Nothing propagates past the
//! handler boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::StoreError;

use crate::body::BodyError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required field, or a path id that is not a positive
    /// integer.
    #[error("{0}")]
    InvalidInput(String),

    /// The body is not JSON of the expected shape.
    #[error("malformed request body: {0}")]
    MalformedPayload(String),

    #[error("Task not found")]
    NotFound,

    #[error("Route not found")]
    RouteNotFound,

    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// The body stream failed before completing; carries the transport error.
    #[error("request body could not be read: {0}")]
    BodyAborted(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::MalformedPayload(_) | ApiError::BodyAborted(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(%status, error = %self, "request rejected");
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput(message) => ApiError::InvalidInput(message),
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<BodyError> for ApiError {
    fn from(err: BodyError) -> Self {
        match err {
            BodyError::TooLarge { limit } => ApiError::PayloadTooLarge { limit },
            BodyError::Aborted(source) => ApiError::BodyAborted(source.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_api_errors() {
        let err = ApiError::from(StoreError::NotFound(9));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Task not found");

        let err = ApiError::from(StoreError::InvalidInput("task is required".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "task is required");
    }

    #[test]
    fn payload_errors_are_client_errors() {
        assert_eq!(
            ApiError::MalformedPayload("EOF".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PayloadTooLarge { limit: 1 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn body_errors_map_to_api_errors() {
        let err = ApiError::from(BodyError::TooLarge { limit: 8 });
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "request body exceeds 8 bytes");

        let source = axum::Error::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "peer went away",
        ));
        let err = ApiError::from(BodyError::Aborted(source));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, ApiError::BodyAborted(ref m) if m.contains("peer went away")));
    }

    #[test]
    fn route_not_found_message() {
        let err = ApiError::RouteNotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Route not found");
    }
}
