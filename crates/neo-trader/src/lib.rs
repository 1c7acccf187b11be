//! Batch equity order CLI for the Kotak Neo gateway.
//!
//! Thin shell around the execution engine:
//! - credential resolution from the environment
//! - batch file parsing
//! - read-only scrip search and holdings display
//! - logging setup and exit behavior

pub mod batch_file;
pub mod config;
pub mod error;
pub mod holdings;
pub mod logging;
pub mod prompt;
pub mod scrips;

pub use error::{AppError, AppResult};
