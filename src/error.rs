//! Error types.

use thiserror::Error;

/// Result alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors returned by a [`Route53Client`](crate::Route53Client).
///
/// The assertions never return these; they turn them into reporter failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The request context was cancelled before the call completed.
    #[error("request cancelled")]
    Cancelled,

    /// The request context deadline passed before the call completed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// The hosted zone id is unknown to the provider.
    #[error("no such hosted zone: {id:?}")]
    NoSuchHostedZone {
        /// The id that was queried.
        id: String,
    },

    /// Any other error reported by the provider API.
    #[error("{code}: {message}")]
    Service {
        /// Provider error code (e.g. `Throttling`).
        code: String,
        /// Human-readable message.
        message: String,
    },

    /// A record type mnemonic that the provider does not support.
    #[error("invalid record type: {0}")]
    InvalidRecordType(String),
}

impl ProviderError {
    /// Shorthand for [`ProviderError::Service`].
    #[must_use]
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the error came from the request context rather than
    /// the provider.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}
