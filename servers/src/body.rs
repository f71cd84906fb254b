//! Incremental request-body accumulation.
//!
//! Bodies arrive as a stream of frames. `read_body` awaits each frame and
//! appends its data to a `BodyAccumulator`, which enforces the byte limit as
//! chunks come in rather than after the fact. A transport error while
//! reading drops the partial buffer; callers only ever see a complete body
//! or an error.

use axum::body::Body;
use bytes::{Bytes, BytesMut};
use http_body_util::BodyExt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// The connection failed or was closed before the body completed.
    #[error("request body aborted: {0}")]
    Aborted(#[source] axum::Error),
}

/// Growable buffer for one request body, capped at `limit` bytes.
#[derive(Debug)]
pub struct BodyAccumulator {
    buf: BytesMut,
    limit: usize,
}

impl BodyAccumulator {
    pub fn new(limit: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            limit,
        }
    }

    pub fn append(&mut self, chunk: &[u8]) -> Result<(), BodyError> {
        if self.buf.len() + chunk.len() > self.limit {
            return Err(BodyError::TooLarge { limit: self.limit });
        }
        self.buf.extend_from_slice(chunk);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// End-of-body: hand out the complete buffer.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Read `body` to completion, failing once more than `limit` bytes arrive.
pub async fn read_body(mut body: Body, limit: usize) -> Result<Bytes, BodyError> {
    let mut acc = BodyAccumulator::new(limit);
    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(BodyError::Aborted)?;
        // Trailers carry no payload.
        if let Ok(chunk) = frame.into_data() {
            acc.append(&chunk)?;
        }
    }
    tracing::trace!(bytes = acc.len(), "request body complete");
    Ok(acc.finish())
}
