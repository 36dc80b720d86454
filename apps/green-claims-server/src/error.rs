//! Error types for the green claims server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use green_claims_engine::ScanError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Text too long: {len} characters (max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::TextTooLong { .. } => (StatusCode::BAD_REQUEST, "TEXT_TOO_LONG"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ScanError> for ServerError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::InvalidInput(_) => ServerError::InvalidRequest(err.to_string()),
            other => ServerError::Internal(other.to_string()),
        }
    }
}
