//! Error types for subscription signing

use thiserror::Error;

/// Errors caused by misuse of the signing API.
///
/// Webhook verification failures are not errors: a forged or stale webhook
/// is reported as a `None` result by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// An argument could not be used as given
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Channel name does not match the accepted syntax
    #[error("Channel should be a valid channel, got: {0}")]
    InvalidChannel(String),
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::InvalidArgument(err.to_string())
    }
}
