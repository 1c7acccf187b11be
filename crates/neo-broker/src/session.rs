//! Authenticated session lifecycle.
//!
//! Exactly one live session exists per process. The manager owns the
//! cached token and wraps every session-dependent call in the bounded
//! retry discipline: on an auth-class failure, invalidate, re-login
//! with a fresh OTP, and retry the same call exactly once. A second
//! failure of any class, or a non-auth failure, surfaces to the caller.
//!
//! Session states: Unauthenticated -> Authenticating -> Authenticated;
//! an auth-class error moves Authenticated -> Invalidated and the next
//! call re-authenticates. A failed re-login is terminal for that
//! operation only; a later call may try again.

use std::sync::Arc;

use neo_core::{EXCHANGE_SEGMENT_CASH, Holding};
use tracing::{debug, info, warn};

use crate::api::{BoxFuture, BrokerApi, OrderReceipt, OrderTicket, ScripMatch, SessionToken};
use crate::credentials::Credentials;
use crate::error::BrokerResult;
use crate::otp::OtpSource;

/// Owner of the single authenticated connection handle.
///
/// Held by one logical operation at a time (`&mut self` everywhere);
/// there is no concurrent access to the session by design.
pub struct SessionManager {
    api: Arc<dyn BrokerApi>,
    credentials: Credentials,
    otp: Box<dyn OtpSource>,
    token: Option<SessionToken>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn BrokerApi>, credentials: Credentials, otp: Box<dyn OtpSource>) -> Self {
        Self {
            api,
            credentials,
            otp,
            token: None,
        }
    }

    /// Current session token, logging in first if necessary.
    ///
    /// Each login attempt consumes a fresh one-time password from the
    /// OTP source; a captured code is never replayed.
    pub async fn session(&mut self) -> BrokerResult<SessionToken> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }

        debug!("no cached session; authenticating");
        let otp = self.otp.next_otp()?;
        let token = self.api.login(&self.credentials, &otp).await?;
        info!("session established");
        self.token = Some(token.clone());
        Ok(token)
    }

    /// Discard the cached session, forcing the next call to re-login.
    pub fn invalidate(&mut self) {
        if self.token.take().is_some() {
            debug!("session invalidated");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Search the cash-market segment for a symbol.
    pub async fn search(&mut self, symbol: &str) -> BrokerResult<Vec<ScripMatch>> {
        let symbol = symbol.to_string();
        self.with_session(move |api, token| {
            let symbol = symbol.clone();
            Box::pin(async move {
                api.search_scrip(&token, EXCHANGE_SEGMENT_CASH, &symbol)
                    .await
            })
        })
        .await
    }

    /// Place one order.
    pub async fn place(&mut self, ticket: OrderTicket) -> BrokerResult<OrderReceipt> {
        self.with_session(move |api, token| {
            let ticket = ticket.clone();
            Box::pin(async move { api.place_order(&token, &ticket).await })
        })
        .await
    }

    /// Fetch current holdings.
    pub async fn holdings(&mut self) -> BrokerResult<Vec<Holding>> {
        self.with_session(|api, token| Box::pin(async move { api.holdings(&token).await }))
            .await
    }

    /// Run one session-dependent operation under the retry discipline.
    ///
    /// At most one retry, and only after an auth-class failure: the
    /// retry re-establishes the session and re-issues the call once.
    /// This bounds retry amplification; in particular an order is only
    /// re-sent when the first attempt was rejected as unauthenticated,
    /// i.e. before the venue could have booked it.
    async fn with_session<T, F>(&mut self, op: F) -> BrokerResult<T>
    where
        F: Fn(Arc<dyn BrokerApi>, SessionToken) -> BoxFuture<'static, BrokerResult<T>>,
    {
        let token = self.session().await?;
        match op(self.api.clone(), token).await {
            Err(e) if e.is_auth_error() => {
                warn!(error = %e, "session rejected mid-operation; re-authenticating once");
                self.invalidate();
                let token = self.session().await?;
                op(self.api.clone(), token).await
            }
            result => result,
        }
    }
}
