//! Credential resolution from the environment.

use crate::error::{AppError, AppResult};
use neo_broker::Credentials;

/// Required environment variables, checked together so the operator
/// sees every missing name in one failure.
const REQUIRED_VARS: [&str; 5] = ["NEO_FIN_KEY", "CONSUMER_KEY", "MOBILE_NO", "UCC", "MPIN"];

/// Gateway base URL override.
pub const BASE_URL_VAR: &str = "NEO_BASE_URL";

/// Optional non-interactive one-time password.
pub const OTP_VAR: &str = "NEO_OTP";

/// Read credentials from the environment, failing fast with the full
/// list of missing names before any network attempt.
pub fn resolve_credentials() -> AppResult<Credentials> {
    resolve_credentials_with(|name| std::env::var(name).ok())
}

/// Testable variant taking a lookup function.
pub fn resolve_credentials_with<F>(lookup: F) -> AppResult<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let missing: Vec<String> = REQUIRED_VARS
        .iter()
        .filter(|name| lookup(name).map_or(true, |v| v.trim().is_empty()))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingCredentials(missing));
    }

    // unwraps are safe: presence was just checked
    let get = |name: &str| lookup(name).unwrap();
    Ok(Credentials {
        neo_fin_key: get("NEO_FIN_KEY"),
        consumer_key: get("CONSUMER_KEY"),
        mobile_number: get("MOBILE_NO"),
        client_code: get("UCC"),
        mpin: get("MPIN"),
    })
}
