//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Order failed local validation; nothing was transmitted
    #[error("Validation error: {0}")]
    Validation(#[from] shared::ValidationError),

    /// The request never completed (connect, timeout, body upload)
    #[error("Transmission error: {0}")]
    Transmission(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Endpoint rejected submission ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ClientError {
    /// True for failures the operator can fix by correcting the form
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
