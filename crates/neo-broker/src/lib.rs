//! Brokerage API adapter and session lifecycle.
//!
//! This crate owns everything that talks to the brokerage gateway:
//!
//! - [`BrokerApi`]: transport trait over the vendor REST API, with a
//!   reqwest-backed [`HttpBroker`] and a recording [`MockBroker`] for
//!   tests
//! - [`SessionManager`]: the single authenticated session per process,
//!   with the two-step login protocol and the invalidate-and-retry-once
//!   discipline for auth-class failures
//! - [`Credentials`] / [`OtpSource`]: already-resolved secrets; this
//!   crate never reads the environment or prompts
//!
//! Error classification happens once, at the adapter boundary: an HTTP
//! 401/403 becomes [`BrokerError::Unauthorized`] and retry logic matches
//! on the variant, never on message text.

pub mod api;
pub mod credentials;
pub mod error;
pub mod http;
pub mod otp;
pub mod session;

pub use api::{
    BoxFuture, BrokerApi, MockBroker, OrderReceipt, OrderTicket, ScripMatch, SessionToken,
};
pub use credentials::Credentials;
pub use error::{BrokerError, BrokerResult};
pub use http::{HttpBroker, DEFAULT_BASE_URL};
pub use otp::{OtpSource, QueuedOtp, SingleUseOtp};
pub use session::SessionManager;
