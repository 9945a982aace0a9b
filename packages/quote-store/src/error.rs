//! Store error types.

use thiserror::Error;

/// Quote store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No quote carries the requested id
    #[error("Quote not found")]
    QuoteNotFound { id: i64 },

    /// Random selection on an empty store
    #[error("No quotes available")]
    NoQuotes,
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
