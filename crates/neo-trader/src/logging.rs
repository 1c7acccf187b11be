//! Structured logging initialization.

use crate::error::{AppError, AppResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with an env-filter.
///
/// Default filter keeps our own crates at debug and everything else at
/// info; override with `RUST_LOG`.
pub fn init_logging() -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,neo_trader=debug,neo_exec=debug,neo_broker=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
