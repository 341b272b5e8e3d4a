//! HTTP-facing errors
//!
//! Every failure a handler can produce ends up as an [`ApiError`], which
//! renders a single JSON shape:
//!
//! ```json
//! { "code": "ENTITY_NOT_FOUND", "message": "...", "details": { ... } }
//! ```
//!
//! # Error Categories
//!
//! - `Validation`: the write was rejected, `details.fields` lists violations
//! - `NotFound`: no record with the requested identifier
//! - `Storage`: the backend failed (integrity violations get their own code)
//! - `Request`: the request itself could not be understood

use crate::core::error::{StorageError, WriteError};
use crate::core::validation::Violations;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field and/or reference validation failed
    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// No record matches the requested identifier
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: Uuid },

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Malformed request input
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Errors caused by the shape of the request rather than its content
#[derive(Debug, Error)]
pub enum RequestError {
    /// Path identifier is not a UUID
    #[error("Invalid entity ID format: '{id}'")]
    InvalidUuid { id: String },

    /// The `{id}` path segment could not be read at all
    #[error("Invalid entity ID path: {message}")]
    InvalidPath { message: String },

    /// Body is present but is not the expected JSON
    #[error("Invalid JSON body: {message}")]
    InvalidJson { message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidUuid { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidUuid { .. } | RequestError::InvalidPath { .. } => "INVALID_UUID",
            RequestError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn not_found(entity_type: &str, id: Uuid) -> Self {
        ApiError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(e) if e.is_integrity() => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Request(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ApiError::Storage(e) if e.is_integrity() => "INTEGRITY_ERROR",
            ApiError::Storage(_) => "STORAGE_ERROR",
            ApiError::Request(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Validation(violations) => {
                Some(serde_json::json!({ "fields": violations }))
            }
            ApiError::NotFound { entity_type, id } => Some(serde_json::json!({
                "entity_type": entity_type,
                "id": id.to_string()
            })),
            _ => None,
        }
    }
}

impl From<WriteError> for ApiError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Rejected(violations) => ApiError::Validation(violations),
            WriteError::Store(e) => ApiError::Storage(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
