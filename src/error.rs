//! Error types for the greeter service
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the greeter service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Connection to the cache store could not be established
    #[error("Cache connection failed: {0}")]
    Connection(String),

    /// No live cache connection is installed
    #[error("Cache store is unavailable")]
    Unavailable,

    /// A command against the cache store failed
    #[error("Cache command failed: {0}")]
    Command(String),

    /// The cache did not answer in time
    #[error("Cache read timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl AppError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Connection(_) | AppError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Command(_) => StatusCode::BAD_GATEWAY,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the greeter service.
pub type Result<T> = std::result::Result<T, AppError>;
