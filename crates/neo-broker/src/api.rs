//! Broker transport trait.
//!
//! Abstracts the vendor REST API behind a trait object so that:
//! - the session/execution layers can be unit tested against a mock
//! - error classification stays at this single boundary
//! - the transport can be swapped without touching callers

use std::pin::Pin;

use neo_core::{Holding, Instrument, OrderKind, TrackingTag, TransactionType};
use rust_decimal::Decimal;

use crate::credentials::Credentials;
use crate::error::BrokerResult;

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Opaque authenticated session handle.
///
/// Produced by a completed two-step login; owned by the session manager
/// and handed by reference to each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One match from a scrip search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScripMatch {
    /// Canonical trading symbol (e.g. "TATASTEEL-EQ").
    pub trading_symbol: String,
    /// Exchange-assigned instrument token.
    pub instrument_token: String,
}

/// Everything the gateway needs to book one order.
///
/// Fixed venue parameters (CNC product, DAY validity, amo off, zero
/// disclosed quantity and market protection) are supplied by the
/// transport; this struct carries only the variable part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTicket {
    pub instrument: Instrument,
    pub transaction_type: TransactionType,
    pub quantity: i64,
    pub order_kind: OrderKind,
    /// Limit price, or the zero sentinel for market orders.
    pub price: Decimal,
    pub tag: TrackingTag,
}

/// Acknowledgement of an accepted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: String,
}

/// Transport over the brokerage API.
///
/// All methods are single network operations with no retry of their
/// own; retry policy lives in [`crate::SessionManager`].
pub trait BrokerApi: Send + Sync {
    /// Run the full two-step login (primary credentials, then OTP/PIN
    /// validation) and return the session handle.
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
        otp: &'a str,
    ) -> BoxFuture<'a, BrokerResult<SessionToken>>;

    /// Search the given exchange segment for a symbol.
    fn search_scrip<'a>(
        &'a self,
        session: &'a SessionToken,
        segment: &'a str,
        symbol: &'a str,
    ) -> BoxFuture<'a, BrokerResult<Vec<ScripMatch>>>;

    /// Place exactly one order.
    fn place_order<'a>(
        &'a self,
        session: &'a SessionToken,
        ticket: &'a OrderTicket,
    ) -> BoxFuture<'a, BrokerResult<OrderReceipt>>;

    /// Fetch current portfolio holdings.
    fn holdings<'a>(&'a self, session: &'a SessionToken)
        -> BoxFuture<'a, BrokerResult<Vec<Holding>>>;
}

// ============================================================================
// MockBroker
// ============================================================================

use parking_lot::Mutex;
use std::collections::VecDeque;

/// Recording mock transport for tests.
///
/// Results are scripted per call via FIFO queues; when a queue is empty
/// a benign default is returned (login succeeds, search echoes the
/// symbol, placement is accepted, holdings are empty). Every call is
/// recorded for assertion.
#[derive(Default)]
pub struct MockBroker {
    login_results: Mutex<VecDeque<BrokerResult<SessionToken>>>,
    search_results: Mutex<VecDeque<BrokerResult<Vec<ScripMatch>>>>,
    place_results: Mutex<VecDeque<BrokerResult<OrderReceipt>>>,
    holdings_results: Mutex<VecDeque<BrokerResult<Vec<Holding>>>>,

    logins: Mutex<Vec<String>>,
    searches: Mutex<Vec<String>>,
    placed: Mutex<Vec<OrderTicket>>,
    holdings_calls: Mutex<usize>,
}

impl MockBroker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_login(&self, result: BrokerResult<SessionToken>) {
        self.login_results.lock().push_back(result);
    }

    pub fn push_search(&self, result: BrokerResult<Vec<ScripMatch>>) {
        self.search_results.lock().push_back(result);
    }

    pub fn push_place(&self, result: BrokerResult<OrderReceipt>) {
        self.place_results.lock().push_back(result);
    }

    pub fn push_holdings(&self, result: BrokerResult<Vec<Holding>>) {
        self.holdings_results.lock().push_back(result);
    }

    /// OTP codes seen by login, in call order.
    pub fn login_otps(&self) -> Vec<String> {
        self.logins.lock().clone()
    }

    pub fn login_count(&self) -> usize {
        self.logins.lock().len()
    }

    /// Symbols queried, in call order.
    pub fn searched_symbols(&self) -> Vec<String> {
        self.searches.lock().clone()
    }

    /// Tickets that reached `place_order`, in call order.
    pub fn placed_tickets(&self) -> Vec<OrderTicket> {
        self.placed.lock().clone()
    }

    pub fn place_count(&self) -> usize {
        self.placed.lock().len()
    }
}

impl BrokerApi for MockBroker {
    fn login<'a>(
        &'a self,
        _credentials: &'a Credentials,
        otp: &'a str,
    ) -> BoxFuture<'a, BrokerResult<SessionToken>> {
        self.logins.lock().push(otp.to_string());
        let result = self
            .login_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(SessionToken::new("mock-session")));
        Box::pin(async move { result })
    }

    fn search_scrip<'a>(
        &'a self,
        _session: &'a SessionToken,
        _segment: &'a str,
        symbol: &'a str,
    ) -> BoxFuture<'a, BrokerResult<Vec<ScripMatch>>> {
        self.searches.lock().push(symbol.to_string());
        let result = self.search_results.lock().pop_front().unwrap_or_else(|| {
            Ok(vec![ScripMatch {
                trading_symbol: format!("{symbol}-EQ"),
                instrument_token: "11536".to_string(),
            }])
        });
        Box::pin(async move { result })
    }

    fn place_order<'a>(
        &'a self,
        _session: &'a SessionToken,
        ticket: &'a OrderTicket,
    ) -> BoxFuture<'a, BrokerResult<OrderReceipt>> {
        self.placed.lock().push(ticket.clone());
        let result = self.place_results.lock().pop_front().unwrap_or_else(|| {
            Ok(OrderReceipt {
                order_id: format!("mock-order-{}", self.placed.lock().len()),
            })
        });
        Box::pin(async move { result })
    }

    fn holdings<'a>(
        &'a self,
        _session: &'a SessionToken,
    ) -> BoxFuture<'a, BrokerResult<Vec<Holding>>> {
        *self.holdings_calls.lock() += 1;
        let result = self
            .holdings_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrokerError as E;

    fn creds() -> Credentials {
        Credentials {
            neo_fin_key: "fin".into(),
            consumer_key: "consumer".into(),
            mobile_number: "m".into(),
            client_code: "ucc".into(),
            mpin: "pin".into(),
        }
    }

    #[tokio::test]
    async fn test_mock_defaults_and_recording() {
        let mock = MockBroker::new();
        let token = mock.login(&creds(), "123456").await.unwrap();
        let matches = mock
            .search_scrip(&token, "nse_cm", "RELIANCE")
            .await
            .unwrap();
        assert_eq!(matches[0].trading_symbol, "RELIANCE-EQ");
        assert_eq!(mock.login_otps(), vec!["123456"]);
        assert_eq!(mock.searched_symbols(), vec!["RELIANCE"]);
    }

    #[tokio::test]
    async fn test_mock_scripted_results_fifo() {
        let mock = MockBroker::new();
        mock.push_search(Err(E::Unauthorized("expired".into())));
        mock.push_search(Ok(vec![]));
        let token = SessionToken::new("t");

        assert!(mock
            .search_scrip(&token, "nse_cm", "X")
            .await
            .unwrap_err()
            .is_auth_error());
        assert!(mock.search_scrip(&token, "nse_cm", "X").await.unwrap().is_empty());
    }
}
