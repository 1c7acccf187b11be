//! End-to-end batch flow: batch file -> runner -> tally, against the
//! mock transport.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use neo_broker::{BrokerError, Credentials, MockBroker, QueuedOtp, SessionManager, SingleUseOtp};
use neo_exec::{BatchRunner, TradeExecutor};
use neo_trader::batch_file;

struct TempBatchFile(PathBuf);

impl TempBatchFile {
    fn with_contents(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("neotrade-it-{name}-{}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempBatchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn credentials() -> Credentials {
    Credentials {
        neo_fin_key: "fin".into(),
        consumer_key: "consumer".into(),
        mobile_number: "+911234567890".into(),
        client_code: "UCC123".into(),
        mpin: "1234".into(),
    }
}

fn runner(mock: Arc<MockBroker>) -> BatchRunner {
    BatchRunner::new(TradeExecutor::new(SessionManager::new(
        mock,
        credentials(),
        Box::new(SingleUseOtp::new("123456")),
    )))
}

#[tokio::test]
async fn batch_file_with_bad_row_processes_the_good_rows() {
    let file = TempBatchFile::with_contents(
        "scenario",
        "TATASTEEL;B;10;MKT\nBADROW\nRELIANCE;S;5;L\n",
    );
    let rows = batch_file::read_trades(file.path());
    assert_eq!(rows.len(), 2);

    let mock = Arc::new(MockBroker::new());
    let mut runner = runner(mock.clone());
    let summary = runner.run(rows, false).await;

    // BADROW was dropped at parse time; the two well-formed rows ran.
    assert_eq!(summary.attempted(), 2);
    assert_eq!(summary.succeeded + summary.failed, 2);
    assert_eq!(mock.searched_symbols(), vec!["TATASTEEL", "RELIANCE"]);
    assert_eq!(mock.login_count(), 1);

    // Tags are distinct even though both rows ran within one second.
    let tags: Vec<_> = summary
        .outcomes
        .iter()
        .map(|o| o.request.tag.as_str().to_string())
        .collect();
    assert_ne!(tags[0], tags[1]);
}

#[tokio::test]
async fn dry_run_batch_never_touches_the_gateway() {
    let file = TempBatchFile::with_contents("dry", "TATASTEEL;B;10;MKT\nRELIANCE;S;5;L;1200\n");
    let rows = batch_file::read_trades(file.path());

    let mock = Arc::new(MockBroker::new());
    let mut runner = runner(mock.clone());
    let summary = runner.run(rows, true).await;

    assert_eq!(summary.attempted(), 2);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(mock.login_count(), 0);
    assert_eq!(mock.place_count(), 0);
    assert!(mock.searched_symbols().is_empty());
}

#[tokio::test]
async fn session_expiry_mid_batch_recovers_and_the_batch_finishes() {
    let file = TempBatchFile::with_contents("expiry", "TATASTEEL;B;10;MKT\nRELIANCE;S;5;MKT\n");
    let rows = batch_file::read_trades(file.path());

    let mock = Arc::new(MockBroker::new());
    // First row's search is fine (default); second row's search hits an
    // expired session once, then the default success applies.
    mock.push_search(Ok(vec![neo_broker::ScripMatch {
        trading_symbol: "TATASTEEL-EQ".into(),
        instrument_token: "11536".into(),
    }]));
    mock.push_search(Err(BrokerError::Unauthorized("session expired".into())));

    let mut runner = BatchRunner::new(TradeExecutor::new(SessionManager::new(
        mock.clone(),
        credentials(),
        Box::new(QueuedOtp::new(["111111", "222222"])),
    )));
    let summary = runner.run(rows, false).await;

    assert_eq!(summary.attempted(), 2);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(mock.login_count(), 2);
    // two orders total; the expiry retried the search, not the order
    assert_eq!(mock.place_count(), 2);
}

#[tokio::test]
async fn missing_batch_file_yields_empty_summary_not_failure() {
    let rows = batch_file::read_trades(Path::new("/nonexistent/trades.csv"));
    let mock = Arc::new(MockBroker::new());
    let mut runner = runner(mock.clone());
    let summary = runner.run(rows, false).await;

    assert!(summary.is_empty());
    assert_eq!(mock.login_count(), 0);
}
