//! Core domain types for the neotrade order CLI.
//!
//! This crate provides the fundamental types shared across the trading
//! pipeline:
//! - `TransactionType`, `OrderKind`: order enums with their wire codes
//! - `Instrument`: a resolved tradable security
//! - `TradeRow`, `TradeRequest`, `TradeOutcome`, `BatchSummary`: the
//!   batch execution data model
//! - `TrackingTag`, `TagGenerator`: unique per-order audit tags

pub mod error;
pub mod holding;
pub mod instrument;
pub mod order;
pub mod tag;
pub mod trade;

pub use error::{CoreError, CoreResult};
pub use holding::Holding;
pub use instrument::{Instrument, EXCHANGE_SEGMENT_CASH};
pub use order::{OrderKind, TransactionType};
pub use tag::{TagGenerator, TrackingTag};
pub use trade::{BatchSummary, TradeOutcome, TradeRequest, TradeRow};
