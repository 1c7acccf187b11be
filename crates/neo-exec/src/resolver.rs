//! Symbol-to-instrument resolution.

use neo_broker::{ScripMatch, SessionManager};
use neo_core::{CoreError, Instrument};
use tracing::debug;

use crate::error::ExecResult;

/// Search the cash segment and return every match for a symbol.
///
/// The symbol is trimmed and uppercased before the query. An empty or
/// whitespace-only symbol is rejected locally, before any network call.
/// An empty result is a normal outcome, distinct from transport or auth
/// failure.
pub async fn search_matches(
    session: &mut SessionManager,
    symbol: &str,
) -> ExecResult<Vec<ScripMatch>> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptySymbol.into());
    }
    let normalized = trimmed.to_uppercase();

    let matches = session.search(&normalized).await?;
    debug!(symbol = %normalized, matches = matches.len(), "scrip search complete");
    Ok(matches)
}

/// Resolve a ticker symbol to a tradable instrument in the cash segment.
///
/// Takes the first search match. Returns `Ok(None)` when the search
/// succeeds but matches nothing. Instruments are never cached; every
/// order re-resolves.
pub async fn resolve(
    session: &mut SessionManager,
    symbol: &str,
) -> ExecResult<Option<Instrument>> {
    Ok(search_matches(session, symbol)
        .await?
        .into_iter()
        .next()
        .map(|m| Instrument::new(m.trading_symbol, m.instrument_token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecError;
    use neo_broker::{Credentials, MockBroker, SingleUseOtp};
    use std::sync::Arc;

    fn session(mock: Arc<MockBroker>) -> SessionManager {
        SessionManager::new(
            mock,
            Credentials {
                neo_fin_key: "fin".into(),
                consumer_key: "consumer".into(),
                mobile_number: "m".into(),
                client_code: "ucc".into(),
                mpin: "pin".into(),
            },
            Box::new(SingleUseOtp::new("123456")),
        )
    }

    #[tokio::test]
    async fn test_empty_symbol_rejected_without_network_call() {
        let mock = Arc::new(MockBroker::new());
        let mut session = session(mock.clone());

        for bad in ["", "   ", "\t"] {
            let err = resolve(&mut session, bad).await.unwrap_err();
            assert!(matches!(err, ExecError::Validation(_)));
        }
        assert!(mock.searched_symbols().is_empty());
        assert_eq!(mock.login_count(), 0);
    }

    #[tokio::test]
    async fn test_symbol_normalized_to_uppercase() {
        let mock = Arc::new(MockBroker::new());
        let mut session = session(mock.clone());

        let instrument = resolve(&mut session, "  reliance ").await.unwrap().unwrap();
        assert_eq!(mock.searched_symbols(), vec!["RELIANCE"]);
        assert_eq!(instrument.symbol, "RELIANCE-EQ");
        assert_eq!(instrument.exchange_segment, "nse_cm");
    }

    #[tokio::test]
    async fn test_search_matches_returns_all() {
        let mock = Arc::new(MockBroker::new());
        mock.push_search(Ok(vec![
            neo_broker::ScripMatch {
                trading_symbol: "RELIANCE-EQ".into(),
                instrument_token: "2885".into(),
            },
            neo_broker::ScripMatch {
                trading_symbol: "RELIANCEPP-EQ".into(),
                instrument_token: "11184".into(),
            },
        ]));
        let mut session = session(mock.clone());

        let matches = search_matches(&mut session, "reliance").await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(mock.searched_symbols(), vec!["RELIANCE"]);
    }

    #[tokio::test]
    async fn test_search_matches_rejects_empty_symbol() {
        let mock = Arc::new(MockBroker::new());
        let mut session = session(mock.clone());

        let err = search_matches(&mut session, "  ").await.unwrap_err();
        assert!(matches!(err, ExecError::Validation(_)));
        assert!(mock.searched_symbols().is_empty());
    }

    #[tokio::test]
    async fn test_zero_matches_is_soft_not_found() {
        let mock = Arc::new(MockBroker::new());
        mock.push_search(Ok(vec![]));
        let mut session = session(mock.clone());

        assert!(resolve(&mut session, "NOSUCH").await.unwrap().is_none());
    }
}
