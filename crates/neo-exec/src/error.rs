//! Execution error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    /// Malformed caller input, rejected before any network call.
    #[error("validation error: {0}")]
    Validation(#[from] neo_core::CoreError),

    /// Resolution succeeded but matched nothing. Soft outcome at the
    /// resolver level; the executor turns it into a failed trade.
    #[error("instrument not found: {0}")]
    InstrumentNotFound(String),

    #[error(transparent)]
    Broker(#[from] neo_broker::BrokerError),
}

/// Result type alias for execution operations.
pub type ExecResult<T> = std::result::Result<T, ExecError>;
