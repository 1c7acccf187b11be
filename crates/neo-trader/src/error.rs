//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required credentials absent. Fatal before any network attempt;
    /// every missing name is listed at once.
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    #[error("broker error: {0}")]
    Broker(#[from] neo_broker::BrokerError),

    #[error("execution error: {0}")]
    Exec(#[from] neo_exec::ExecError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
