//! Response types and helpers for HTTP endpoints.

use serde::Serialize;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Confirmation body for endpoints without a record to return
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Helper to create error response
pub fn error_response(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        error: message.into(),
    }
}

/// Helper to create message response
pub fn message_response(message: impl Into<String>) -> MessageResponse {
    MessageResponse {
        message: message.into(),
    }
}
