//! # Application Error
//!
//! Maps domain outcomes to structured HTTP responses. Two shapes are used:
//! a generic error envelope for lookup misses and server faults, and a
//! field-keyed error map for payload validation failures so clients can
//! attach each message to the offending input field.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request payload validation failed; one message per offending field.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                let body = serde_json::json!({
                    "title": "Validation failed",
                    "errors": errors,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            AppError::NotFound(message) => envelope(StatusCode::NOT_FOUND, &message),
            AppError::Internal(message) => envelope(StatusCode::INTERNAL_SERVER_ERROR, &message),
        }
    }
}

fn envelope(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({
        "error": {
            "code": status.as_u16(),
            "message": message,
        }
    });
    (status, axum::Json(body)).into_response()
}
