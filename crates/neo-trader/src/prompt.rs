//! Interactive one-time password source.

use neo_broker::{BrokerError, BrokerResult, OtpSource};

/// Prompts the operator for a fresh code on every login attempt.
///
/// This is the only interactive piece of the program; everything below
/// the CLI receives credentials as resolved values.
pub struct PromptOtp;

impl OtpSource for PromptOtp {
    fn next_otp(&self) -> BrokerResult<String> {
        let code = rpassword::prompt_password("Enter TOTP: ")
            .map_err(|e| BrokerError::OtpUnavailable(format!("prompt failed: {e}")))?;
        let code = code.trim().to_string();
        if code.is_empty() {
            return Err(BrokerError::OtpUnavailable("empty code entered".to_string()));
        }
        Ok(code)
    }
}
