//! Reqwest-backed transport for the vendor gateway.
//!
//! Maps gateway responses into the typed [`BrokerError`] taxonomy at
//! this boundary: 401/403 become `Unauthorized`, non-auth placement
//! failures become `Rejected`, everything else transport-class `Http`.

use std::time::Duration;

use neo_core::Holding;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{BoxFuture, BrokerApi, OrderReceipt, OrderTicket, ScripMatch, SessionToken};
use crate::credentials::Credentials;
use crate::error::{BrokerError, BrokerResult};

/// Production gateway.
pub const DEFAULT_BASE_URL: &str = "https://gw-napi.kotaksecurities.com";

/// Per-call timeout. A hung gateway call must not stall the whole batch.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// First login step: primary credentials plus the one-time password.
#[derive(Debug, Serialize)]
struct TotpLoginRequest<'a> {
    #[serde(rename = "mobileNumber")]
    mobile_number: &'a str,
    ucc: &'a str,
    totp: &'a str,
}

/// Second login step: PIN validation against the view token.
#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    mpin: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    data: LoginData,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(rename = "tradingSymbol")]
    trading_symbol: String,
    #[serde(rename = "instrumentToken")]
    instrument_token: String,
}

/// Order placement body. Fixed venue parameters are baked in here:
/// delivery product, day validity, no after-market flag, zero disclosed
/// quantity / market protection / trigger price.
#[derive(Debug, Serialize)]
struct PlaceOrderRequest<'a> {
    exchange_segment: &'a str,
    product: &'a str,
    price: String,
    order_type: &'a str,
    quantity: String,
    validity: &'a str,
    trading_symbol: &'a str,
    transaction_type: &'a str,
    amo: &'a str,
    disclosed_quantity: &'a str,
    market_protection: &'a str,
    pf: &'a str,
    trigger_price: &'a str,
    tag: &'a str,
}

#[derive(Debug, Deserialize)]
struct PlaceOrderResponse {
    #[serde(rename = "nOrdNo")]
    order_no: String,
}

#[derive(Debug, Deserialize)]
struct HoldingsResponse {
    #[serde(default)]
    data: Vec<Holding>,
}

/// HTTP transport against the vendor REST gateway.
pub struct HttpBroker {
    client: Client,
    base_url: String,
}

impl HttpBroker {
    /// Build a transport against the given gateway base URL.
    pub fn new(base_url: impl Into<String>) -> BrokerResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| BrokerError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response body, classifying failures as `Json`.
    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> BrokerResult<T> {
        Ok(serde_json::from_str(body)?)
    }

    /// Map a non-success response into the typed taxonomy.
    ///
    /// This is the single place auth classification happens: retry
    /// logic upstream matches on the variant, never on the text.
    async fn classify_failure(response: reqwest::Response, placing: bool) -> BrokerError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BrokerError::Unauthorized(format!("HTTP {status}: {body}"))
            }
            _ if placing => BrokerError::Rejected(format!("HTTP {status}: {body}")),
            _ => BrokerError::Http(format!("HTTP {status}: {body}")),
        }
    }

    async fn do_login(&self, credentials: &Credentials, otp: &str) -> BrokerResult<SessionToken> {
        debug!(client_code = %credentials.client_code, "starting two-step login");

        // Step 1: primary credentials + OTP, yields a view token.
        let request = TotpLoginRequest {
            mobile_number: &credentials.mobile_number,
            ucc: &credentials.client_code,
            totp: otp,
        };
        let response = self
            .client
            .post(self.url("/login/1.0/login/v2/totp/login"))
            .header("neo-fin-key", &credentials.neo_fin_key)
            .header("consumer-key", &credentials.consumer_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BrokerError::LoginFailed(format!("totp login request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BrokerError::LoginFailed(format!("HTTP {status}: {body}")));
        }
        let view: LoginResponse = response
            .json()
            .await
            .map_err(|e| BrokerError::LoginFailed(format!("bad totp login response: {e}")))?;

        // Step 2: PIN validation upgrades the view token to a session.
        let request = ValidateRequest {
            mpin: &credentials.mpin,
        };
        let response = self
            .client
            .post(self.url("/login/1.0/login/v2/totp/validate"))
            .bearer_auth(&view.data.token)
            .header("neo-fin-key", &credentials.neo_fin_key)
            .header("consumer-key", &credentials.consumer_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BrokerError::LoginFailed(format!("totp validate request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BrokerError::LoginFailed(format!("HTTP {status}: {body}")));
        }
        let session: LoginResponse = response
            .json()
            .await
            .map_err(|e| BrokerError::LoginFailed(format!("bad totp validate response: {e}")))?;

        info!(client_code = %credentials.client_code, "login complete");
        Ok(SessionToken::new(session.data.token))
    }

    async fn do_search(
        &self,
        session: &SessionToken,
        segment: &str,
        symbol: &str,
    ) -> BrokerResult<Vec<ScripMatch>> {
        debug!(%symbol, %segment, "scrip search");

        let response = self
            .client
            .get(self.url("/script/1.0/search"))
            .bearer_auth(session.as_str())
            .query(&[("exchangeSegment", segment), ("symbol", symbol)])
            .send()
            .await
            .map_err(|e| BrokerError::Http(format!("search request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response, false).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BrokerError::Http(format!("failed to read search response: {e}")))?;
        let parsed: SearchResponse = Self::decode(&body)?;

        Ok(parsed
            .data
            .into_iter()
            .map(|e| ScripMatch {
                trading_symbol: e.trading_symbol,
                instrument_token: e.instrument_token,
            })
            .collect())
    }

    async fn do_place(
        &self,
        session: &SessionToken,
        ticket: &OrderTicket,
    ) -> BrokerResult<OrderReceipt> {
        let request = PlaceOrderRequest {
            exchange_segment: &ticket.instrument.exchange_segment,
            product: "CNC",
            price: ticket.price.to_string(),
            order_type: ticket.order_kind.wire_code(),
            quantity: ticket.quantity.to_string(),
            validity: "DAY",
            trading_symbol: &ticket.instrument.symbol,
            transaction_type: ticket.transaction_type.wire_code(),
            amo: "NO",
            disclosed_quantity: "0",
            market_protection: "0",
            pf: "N",
            trigger_price: "0",
            tag: ticket.tag.as_str(),
        };

        debug!(
            symbol = %ticket.instrument.symbol,
            side = %ticket.transaction_type,
            quantity = ticket.quantity,
            tag = %ticket.tag,
            "placing order"
        );

        let response = self
            .client
            .post(self.url("/orders/2.0/quick/order/rule/ms/place"))
            .bearer_auth(session.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| BrokerError::Http(format!("order request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response, true).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BrokerError::Http(format!("failed to read order response: {e}")))?;
        let parsed: PlaceOrderResponse = Self::decode(&body)?;

        info!(order_id = %parsed.order_no, tag = %ticket.tag, "order accepted");
        Ok(OrderReceipt {
            order_id: parsed.order_no,
        })
    }

    async fn do_holdings(&self, session: &SessionToken) -> BrokerResult<Vec<Holding>> {
        let response = self
            .client
            .get(self.url("/portfolio/1.0/holdings"))
            .bearer_auth(session.as_str())
            .send()
            .await
            .map_err(|e| BrokerError::Http(format!("holdings request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response, false).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BrokerError::Http(format!("failed to read holdings response: {e}")))?;
        let parsed: HoldingsResponse = Self::decode(&body)?;

        Ok(parsed.data)
    }
}

impl BrokerApi for HttpBroker {
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
        otp: &'a str,
    ) -> BoxFuture<'a, BrokerResult<SessionToken>> {
        Box::pin(self.do_login(credentials, otp))
    }

    fn search_scrip<'a>(
        &'a self,
        session: &'a SessionToken,
        segment: &'a str,
        symbol: &'a str,
    ) -> BoxFuture<'a, BrokerResult<Vec<ScripMatch>>> {
        Box::pin(self.do_search(session, segment, symbol))
    }

    fn place_order<'a>(
        &'a self,
        session: &'a SessionToken,
        ticket: &'a OrderTicket,
    ) -> BoxFuture<'a, BrokerResult<OrderReceipt>> {
        Box::pin(self.do_place(session, ticket))
    }

    fn holdings<'a>(
        &'a self,
        session: &'a SessionToken,
    ) -> BoxFuture<'a, BrokerResult<Vec<Holding>>> {
        Box::pin(self.do_holdings(session))
    }
}
