//! One-time password sources.
//!
//! One-time passwords are single-use and time-boxed, so a login retry
//! must never replay a previously captured code. Every login attempt
//! asks its [`OtpSource`] for a fresh code; sources that cannot produce
//! one fail loudly instead of handing back a stale value.

use crate::error::{BrokerError, BrokerResult};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Supplies a fresh one-time password for each login attempt.
pub trait OtpSource: Send + Sync {
    fn next_otp(&self) -> BrokerResult<String>;
}

/// A code captured up front (e.g. from an environment variable).
///
/// Yields its value exactly once. A second request means a re-login is
/// being attempted with no way to obtain a fresh code, which is an
/// error, not an invitation to replay.
pub struct SingleUseOtp {
    code: Mutex<Option<String>>,
}

impl SingleUseOtp {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Mutex::new(Some(code.into())),
        }
    }
}

impl OtpSource for SingleUseOtp {
    fn next_otp(&self) -> BrokerResult<String> {
        self.code.lock().take().ok_or_else(|| {
            BrokerError::OtpUnavailable(
                "single-use code already consumed; re-run with a fresh code".to_string(),
            )
        })
    }
}

/// A queue of pre-arranged codes. Used by tests that exercise re-login.
pub struct QueuedOtp {
    codes: Mutex<VecDeque<String>>,
}

impl QueuedOtp {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: Mutex::new(codes.into_iter().map(Into::into).collect()),
        }
    }
}

impl OtpSource for QueuedOtp {
    fn next_otp(&self) -> BrokerResult<String> {
        self.codes
            .lock()
            .pop_front()
            .ok_or_else(|| BrokerError::OtpUnavailable("code queue exhausted".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_use_yields_once() {
        let source = SingleUseOtp::new("123456");
        assert_eq!(source.next_otp().unwrap(), "123456");
        assert!(matches!(
            source.next_otp(),
            Err(BrokerError::OtpUnavailable(_))
        ));
    }

    #[test]
    fn test_queued_in_order() {
        let source = QueuedOtp::new(["111111", "222222"]);
        assert_eq!(source.next_otp().unwrap(), "111111");
        assert_eq!(source.next_otp().unwrap(), "222222");
        assert!(source.next_otp().is_err());
    }
}
