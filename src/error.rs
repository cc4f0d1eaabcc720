//! Error types for sharedir operations.
//!
//! Every failure is caught at the operation boundary and turned into a
//! structured `{message, success: false}` response; nothing propagates to the
//! HTTP client as an unhandled fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the scanner, mutation operations, and configuration.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The request body exceeds `server.max_upload_bytes`.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// The destination of an operation already exists.
    #[error("{0}")]
    Conflict(String),

    /// A filesystem call failed.
    #[error("{message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A blocking task panicked or was cancelled.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Wrap an I/O error with a human-readable description of the operation.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        ApiError::Io {
            message: message.into(),
            source,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Io { .. } | ApiError::ConfigError(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short message shown to the user (without the underlying cause).
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(m) | ApiError::Conflict(m) | ApiError::PayloadTooLarge(m) => {
                m.clone()
            }
            ApiError::Io { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Io { message, source } => json!({
                "message": message,
                "error": source.to_string(),
                "success": false,
            }),
            _ => json!({
                "message": self.user_message(),
                "success": false,
            }),
        };
        (status, Json(body)).into_response()
    }
}
