//! Broker error types.

use thiserror::Error;

/// Errors from the brokerage adapter and session layer.
///
/// Classification is structural: the HTTP adapter maps gateway status
/// codes into variants exactly once, so callers decide on retry by
/// matching the variant rather than scanning message text.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// Session rejected by the gateway (HTTP 401/403): expired token,
    /// revoked session, or failed two-factor state. The only
    /// retryable class, and only via re-authentication.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Login or one-time-password validation rejected.
    #[error("login failed: {0}")]
    LoginFailed(String),

    /// Order refused by the gateway (non-auth 4xx/5xx on placement).
    #[error("order rejected: {0}")]
    Rejected(String),

    /// Transport-level failure: connect, timeout, non-success status on
    /// a read call.
    #[error("http error: {0}")]
    Http(String),

    /// Response body from the gateway failed to decode.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The OTP source could not produce a fresh code (e.g. a single-use
    /// environment code was already consumed).
    #[error("one-time password unavailable: {0}")]
    OtpUnavailable(String),
}

impl BrokerError {
    /// Whether this error calls for session invalidation and one retry.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Result type alias for broker operations.
pub type BrokerResult<T> = std::result::Result<T, BrokerError>;
