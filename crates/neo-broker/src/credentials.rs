//! Connection credentials.

use std::fmt;

/// Already-resolved connection secrets.
///
/// The caller (CLI layer) is responsible for sourcing these from the
/// environment or a prompt; nothing in this crate reads the environment
/// itself. Immutable for the lifetime of a run. The one-time password
/// is deliberately not part of this struct: it is single-use and comes
/// from an [`crate::OtpSource`] at each login attempt.
#[derive(Clone)]
pub struct Credentials {
    /// Vendor application key.
    pub neo_fin_key: String,
    /// OAuth consumer key.
    pub consumer_key: String,
    /// Registered mobile number.
    pub mobile_number: String,
    /// Unique client code (UCC).
    pub client_code: String,
    /// Trading PIN, validated in the second login step.
    pub mpin: String,
}

// Secrets stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("neo_fin_key", &"<redacted>")
            .field("consumer_key", &"<redacted>")
            .field("mobile_number", &"<redacted>")
            .field("client_code", &self.client_code)
            .field("mpin", &"<redacted>")
            .finish()
    }
}
