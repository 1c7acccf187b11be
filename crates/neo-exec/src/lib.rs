//! Trade execution engine.
//!
//! - [`resolver`]: symbol -> instrument resolution against the cash
//!   segment (soft not-found, no caching)
//! - [`TradeExecutor`]: one order per invocation, dry-run support, all
//!   failures contained into a [`neo_core::TradeOutcome`]
//! - [`BatchRunner`]: ordered sequential processing with per-row
//!   failure isolation and a final tally

pub mod batch;
pub mod error;
pub mod executor;
pub mod resolver;

pub use batch::BatchRunner;
pub use error::{ExecError, ExecResult};
pub use executor::TradeExecutor;
