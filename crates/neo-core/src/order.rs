//! Order enums and their wire codes.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction side: buy or sell.
///
/// The gateway speaks single-letter codes (`B` / `S`); the batch file
/// uses the same codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    /// Single-letter code used on the wire and in batch files.
    pub fn wire_code(&self) -> &'static str {
        match self {
            Self::Buy => "B",
            Self::Sell => "S",
        }
    }
}

impl FromStr for TransactionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "B" | "b" => Ok(Self::Buy),
            "S" | "s" => Ok(Self::Sell),
            other => Err(CoreError::UnknownTransactionType(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order pricing mode.
///
/// Market orders always carry the zero price sentinel; limit orders
/// require an explicit non-negative price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Market,
    Limit,
}

impl OrderKind {
    /// Code used on the wire and in batch files.
    pub fn wire_code(&self) -> &'static str {
        match self {
            Self::Market => "MKT",
            Self::Limit => "L",
        }
    }
}

impl FromStr for OrderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MKT" | "mkt" => Ok(Self::Market),
            "L" | "l" => Ok(Self::Limit),
            other => Err(CoreError::UnknownOrderKind(other.to_string())),
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Limit => write!(f, "limit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_parse() {
        assert_eq!("B".parse::<TransactionType>().unwrap(), TransactionType::Buy);
        assert_eq!("s".parse::<TransactionType>().unwrap(), TransactionType::Sell);
        assert!("X".parse::<TransactionType>().is_err());
        assert!("".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_order_kind_parse() {
        assert_eq!("MKT".parse::<OrderKind>().unwrap(), OrderKind::Market);
        assert_eq!("l".parse::<OrderKind>().unwrap(), OrderKind::Limit);
        assert!("LIMIT".parse::<OrderKind>().is_err());
    }

    #[test]
    fn test_wire_codes_round_trip() {
        for side in [TransactionType::Buy, TransactionType::Sell] {
            assert_eq!(side.wire_code().parse::<TransactionType>().unwrap(), side);
        }
        for kind in [OrderKind::Market, OrderKind::Limit] {
            assert_eq!(kind.wire_code().parse::<OrderKind>().unwrap(), kind);
        }
    }
}
