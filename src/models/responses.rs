//! Response bodies for the greeter service
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::fmt;

use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::seed::GREETING_PREFIX;

/// Rendering used when the cache holds no value for the key.
pub const MISSING_VALUE: &str = "null";

/// Plain-text body for GET /
///
/// Renders as [`GREETING_PREFIX`] followed by the cached value, or by
/// [`MISSING_VALUE`] when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    value: Option<String>,
}

impl Greeting {
    /// Creates a Greeting for a value read from the cache
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    /// The cached value, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or(MISSING_VALUE);
        write!(f, "{}{}", GREETING_PREFIX, value)
    }
}

// String bodies are served as text/plain; charset=utf-8
impl IntoResponse for Greeting {
    fn into_response(self) -> Response {
        self.to_string().into_response()
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
