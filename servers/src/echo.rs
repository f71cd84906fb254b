//! Echo server: `POST /submit` answers with the body it received.
//!
//! Every other method or path gets an HTML 404 page.

use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::body::{read_body, BodyError};
use crate::config::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
use crate::{shutdown_signal, ServeError};

pub const NOT_FOUND_HTML: &str = "<h1>404 Not Found</h1>";

#[derive(Clone, Copy)]
struct EchoState {
    max_body_bytes: usize,
}

pub fn app() -> Router {
    router(DEFAULT_MAX_BODY_BYTES)
}

pub fn router(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/submit", post(submit).fallback(not_found_page))
        .fallback(not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(EchoState { max_body_bytes })
}

pub async fn run(listener: TcpListener, config: &ServerConfig) -> Result<(), ServeError> {
    axum::serve(listener, router(config.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Text returned for a received body. Invalid UTF-8 is replaced, not
/// rejected.
pub fn echo_reply(body: &[u8]) -> String {
    format!("Received data: {}", String::from_utf8_lossy(body))
}

async fn submit(State(state): State<EchoState>, body: Body) -> Response {
    match read_body(body, state.max_body_bytes).await {
        Ok(bytes) => {
            tracing::debug!(bytes = bytes.len(), "echoing submission");
            echo_reply(&bytes).into_response()
        }
        Err(err) => {
            let status = match err {
                BodyError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                BodyError::Aborted(_) => StatusCode::BAD_REQUEST,
            };
            tracing::debug!(error = %err, "submission rejected");
            (status, err.to_string()).into_response()
        }
    }
}

async fn not_found_page() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_prefixes_body() {
        assert_eq!(echo_reply(b"hello"), "Received data: hello");
    }

    #[test]
    fn reply_to_empty_body() {
        assert_eq!(echo_reply(b""), "Received data: ");
    }

    #[test]
    fn reply_replaces_invalid_utf8() {
        assert_eq!(echo_reply(&[b'a', 0xff, b'b']), "Received data: a\u{fffd}b");
    }
}
