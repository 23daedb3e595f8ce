//! # API Errors
//!
//! Error types for the song API and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Song API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required body field absent or null
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Body field present but unusable
    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Body is not a JSON object of the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path parameter could not be parsed
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// No song with this id
    #[error("Song not found: {0}")]
    NotFound(i64),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; details go to the log only
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for 4xx errors
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "store operation failed");
        ApiError::Internal
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
