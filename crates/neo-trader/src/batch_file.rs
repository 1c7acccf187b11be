//! Batch file parsing.
//!
//! One trade per line, `;`-delimited: `symbol;B|S;quantity;MKT|L` with
//! an optional fifth field carrying a limit price. Malformed rows are
//! skipped with a warning; a missing or unreadable file yields an empty
//! batch rather than a crash.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use neo_core::{CoreError, CoreResult, OrderKind, TradeRow, TransactionType};
use rust_decimal::Decimal;
use tracing::warn;

/// Read trade rows from a batch file, in file order.
pub fn read_trades(path: &Path) -> Vec<TradeRow> {
    let mut reader = match ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not open batch file; treating as empty");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(line, error = %e, "skipping unreadable row");
                continue;
            }
        };
        match parse_row(&record) {
            Ok(row) => rows.push(row),
            Err(e) => warn!(line, error = %e, "skipping malformed row"),
        }
    }
    rows
}

fn parse_row(record: &StringRecord) -> CoreResult<TradeRow> {
    if record.len() != 4 && record.len() != 5 {
        return Err(CoreError::WrongFieldCount(record.len()));
    }

    let symbol = record[0].to_string();
    let transaction_type: TransactionType = record[1].parse()?;
    let quantity: i64 = record[2]
        .parse()
        .map_err(|_| CoreError::QuantityParse(record[2].to_string()))?;
    let order_kind: OrderKind = record[3].parse()?;
    let price = match record.get(4) {
        Some(raw) if !raw.is_empty() => Some(
            raw.parse::<Decimal>()
                .map_err(|_| CoreError::PriceParse(raw.to_string()))?,
        ),
        _ => None,
    };

    Ok(TradeRow {
        symbol,
        transaction_type,
        quantity,
        order_kind,
        price,
    })
}
