//! Service error taxonomy
//!
//! Errors are typed internally but surfaced to HTTP callers only as an
//! opaque 500; the underlying cause is logged server-side and never exposed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Body sent for any failed data route
const OPAQUE_ERROR_BODY: &str = "Server error";

/// Top-level service error
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or invalid configuration. Fatal at construction time.
    #[error("configuration error: {0}")]
    Config(String),

    /// A document store failure during a request. Recovered locally and
    /// mapped to an opaque 500 response.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, OPAQUE_ERROR_BODY).into_response()
    }
}
