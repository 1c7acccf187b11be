//! Error types for neo-core.

use thiserror::Error;

/// Core error types.
///
/// Everything in this enum is a local validation failure: it is raised
/// before any network call is made and is scoped to a single row or
/// operation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("symbol is empty")]
    EmptySymbol,

    #[error("invalid quantity {0}: must be a positive integer")]
    InvalidQuantity(i64),

    #[error("invalid price {0}: must be non-negative")]
    InvalidPrice(rust_decimal::Decimal),

    #[error("unknown transaction type: {0:?} (expected B or S)")]
    UnknownTransactionType(String),

    #[error("unknown order type: {0:?} (expected MKT or L)")]
    UnknownOrderKind(String),

    #[error("expected 4 or 5 fields, got {0}")]
    WrongFieldCount(usize),

    #[error("unparsable quantity: {0:?}")]
    QuantityParse(String),

    #[error("unparsable price: {0:?}")]
    PriceParse(String),
}

/// Result type alias for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
