//! Portfolio holding, as reported by the gateway.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One holding row from the portfolio endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: i64,
    #[serde(rename = "averagePrice")]
    pub average_price: Decimal,
    #[serde(rename = "closingPrice")]
    pub closing_price: Decimal,
}

impl Holding {
    /// Unrealized profit and loss against the closing price.
    pub fn pnl(&self) -> Decimal {
        (self.closing_price - self.average_price) * Decimal::from(self.quantity)
    }
}
