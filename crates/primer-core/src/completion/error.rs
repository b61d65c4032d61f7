//! Completion error types.

use thiserror::Error;

/// Errors from a completion call.
///
/// Every failure is terminal for the request that produced it; callers do
/// not retry.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
