//! Resolved instrument metadata.

use serde::{Deserialize, Serialize};

/// Exchange segment for ordinary equity trades (NSE cash market).
///
/// Everything this tool trades lives in the cash segment; derivatives
/// segments are out of scope.
pub const EXCHANGE_SEGMENT_CASH: &str = "nse_cm";

/// A tradable security resolved from a ticker symbol.
///
/// Produced by a successful scrip search. Instruments are never cached:
/// each order re-resolves its symbol, which keeps the flow simple at the
/// low request volumes this tool handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Canonical trading symbol as known to the exchange (e.g. "TATASTEEL-EQ").
    pub symbol: String,
    /// Exchange-assigned instrument token.
    pub token: String,
    /// Segment the instrument trades in.
    pub exchange_segment: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            token: token.into(),
            exchange_segment: EXCHANGE_SEGMENT_CASH.to_string(),
        }
    }
}
