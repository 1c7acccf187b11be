//! Batch execution data model: rows, requests, outcomes, summary.

use crate::error::{CoreError, CoreResult};
use crate::order::{OrderKind, TransactionType};
use crate::tag::TrackingTag;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parsed (but not yet validated) row of intended trading.
///
/// Rows come from the batch file or from a single-symbol CLI invocation.
/// Structural problems (wrong field count, unparsable numbers) are
/// rejected at parse time; value problems (zero quantity, negative
/// price) are caught by [`TradeRequest::validate`] and become failed
/// outcomes instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRow {
    pub symbol: String,
    pub transaction_type: TransactionType,
    pub quantity: i64,
    pub order_kind: OrderKind,
    /// Limit price; `None` for market orders (zero sentinel on the wire).
    pub price: Option<Decimal>,
}

/// A fully tagged trade, ready for the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub symbol: String,
    pub transaction_type: TransactionType,
    pub quantity: i64,
    pub order_kind: OrderKind,
    pub price: Option<Decimal>,
    pub tag: TrackingTag,
}

impl TradeRequest {
    pub fn from_row(row: TradeRow, tag: TrackingTag) -> Self {
        Self {
            symbol: row.symbol,
            transaction_type: row.transaction_type,
            quantity: row.quantity,
            order_kind: row.order_kind,
            price: row.price,
            tag,
        }
    }

    /// Local pre-submission checks. Violations never reach the network.
    pub fn validate(&self) -> CoreResult<()> {
        if self.symbol.trim().is_empty() {
            return Err(CoreError::EmptySymbol);
        }
        if self.quantity <= 0 {
            return Err(CoreError::InvalidQuantity(self.quantity));
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(CoreError::InvalidPrice(price));
            }
        }
        Ok(())
    }

    /// Price to put on the wire: the limit price, or the zero sentinel
    /// for market orders.
    pub fn wire_price(&self) -> Decimal {
        match self.order_kind {
            OrderKind::Market => Decimal::ZERO,
            OrderKind::Limit => self.price.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Final, immutable result of one trade request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub request: TradeRequest,
    pub succeeded: bool,
    /// Human-readable description: the accepted order id, the dry-run
    /// summary, or the failure reason.
    pub detail: String,
}

impl TradeOutcome {
    pub fn success(request: TradeRequest, detail: impl Into<String>) -> Self {
        Self {
            request,
            succeeded: true,
            detail: detail.into(),
        }
    }

    pub fn failure(request: TradeRequest, detail: impl Into<String>) -> Self {
        Self {
            request,
            succeeded: false,
            detail: detail.into(),
        }
    }
}

/// Tally over one batch run.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<TradeOutcome>,
}

impl BatchSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: TradeOutcome) {
        if outcome.succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Total requests processed.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// True when the batch had nothing to do, as opposed to everything
    /// failing. Operators need to tell those apart.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
