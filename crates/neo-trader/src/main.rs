//! neotrade - batch equity order CLI entry point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use neo_broker::{
    HttpBroker, OtpSource, SessionManager, SingleUseOtp, DEFAULT_BASE_URL,
};
use neo_core::{OrderKind, TradeRow, TransactionType};
use neo_exec::{BatchRunner, TradeExecutor};
use neo_trader::{batch_file, config, holdings, logging, prompt::PromptOtp, scrips};
use rust_decimal::Decimal;
use tracing::{error, info};

/// Place equity orders against the Kotak Neo gateway.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Batch file of trades (symbol;B|S;qty;MKT|L[;price] per line)
    #[arg(short, long, default_value = "trades.csv")]
    file: PathBuf,

    /// Simulate: report what would be placed without contacting the gateway
    #[arg(long)]
    dry_run: bool,

    /// Display current holdings instead of trading
    #[arg(long, conflicts_with_all = ["symbol", "qty"])]
    holdings: bool,

    /// Look up a symbol's scrip matches instead of trading
    #[arg(long, conflicts_with_all = ["symbol", "qty", "holdings"])]
    search: Option<String>,

    /// Trade a single symbol instead of a batch file
    #[arg(long, requires = "qty")]
    symbol: Option<String>,

    /// Quantity for single-symbol mode
    #[arg(long, requires = "symbol")]
    qty: Option<i64>,

    /// Sell instead of buy (single-symbol mode)
    #[arg(long, requires = "symbol")]
    sell: bool,

    /// Limit price (single-symbol mode; market order when omitted)
    #[arg(long, requires = "symbol")]
    limit: Option<Decimal>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging()?;

    // A missing .env is fine; anything else is worth surfacing.
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound) {
            bail!("failed to load .env: {e}");
        }
    }

    let credentials = config::resolve_credentials()?;

    let base_url =
        std::env::var(config::BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let api = Arc::new(HttpBroker::new(base_url)?);

    let otp: Box<dyn OtpSource> = match std::env::var(config::OTP_VAR) {
        Ok(code) if !code.trim().is_empty() => Box::new(SingleUseOtp::new(code.trim())),
        _ => Box::new(PromptOtp),
    };
    let mut session = SessionManager::new(api, credentials, otp);

    if args.holdings {
        let rows = session.holdings().await?;
        println!("{}", holdings::render(&rows));
        return Ok(());
    }

    if let Some(query) = &args.search {
        let matches = neo_exec::resolver::search_matches(&mut session, query).await?;
        println!("{}", scrips::render(&matches));
        return Ok(());
    }

    let rows = match (&args.symbol, args.qty) {
        (Some(symbol), Some(qty)) => vec![TradeRow {
            symbol: symbol.clone(),
            transaction_type: if args.sell {
                TransactionType::Sell
            } else {
                TransactionType::Buy
            },
            quantity: qty,
            order_kind: if args.limit.is_some() {
                OrderKind::Limit
            } else {
                OrderKind::Market
            },
            price: args.limit,
        }],
        _ => batch_file::read_trades(&args.file),
    };

    // Authentication failure before any trading begins is a hard abort.
    // Dry runs stay fully offline, so they skip this.
    if !args.dry_run && !rows.is_empty() {
        session.session().await?;
    }

    let mut runner = BatchRunner::new(TradeExecutor::new(session));
    let summary = runner.run(rows, args.dry_run).await;

    if summary.is_empty() {
        info!("no trades to process");
        return Ok(());
    }

    for outcome in &summary.outcomes {
        if !outcome.succeeded {
            error!(
                symbol = %outcome.request.symbol,
                tag = %outcome.request.tag,
                detail = %outcome.detail,
                "trade failed"
            );
        }
    }
    info!(
        attempted = summary.attempted(),
        succeeded = summary.succeeded,
        failed = summary.failed,
        "done"
    );

    Ok(())
}
