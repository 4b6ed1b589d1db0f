//! Error types for the hero API.
//!
//! [`ApiError`] unifies all handler failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the hero API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested hero does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A hero id in the path was not an integer.
    #[error("invalid hero id: {0}")]
    InvalidId(String),

    /// The request body was well-formed but not acceptable.
    #[error("invalid hero: {0}")]
    InvalidHero(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, format!("{msg} not found")),
            Self::InvalidId(msg) | Self::InvalidHero(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
