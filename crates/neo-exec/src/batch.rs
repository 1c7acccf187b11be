//! Ordered batch processing with per-row failure isolation.

use neo_core::{BatchSummary, TagGenerator, TradeRequest, TradeRow};
use tracing::{info, warn};

use crate::executor::TradeExecutor;

/// Runs an ordered sequence of trade rows to completion.
///
/// Rows are processed strictly in input order, one at a time: the
/// session handle is not safe for concurrent use, and the workload is
/// low-volume by design. A row's failure never halts the batch; that
/// isolation is a contract, not a side effect of error handling.
pub struct BatchRunner {
    executor: TradeExecutor,
    tags: TagGenerator,
}

impl BatchRunner {
    pub fn new(executor: TradeExecutor) -> Self {
        Self {
            executor,
            tags: TagGenerator::new(),
        }
    }

    pub fn executor_mut(&mut self) -> &mut TradeExecutor {
        &mut self.executor
    }

    /// Process every row and return the tally.
    ///
    /// An empty input returns immediately with an empty summary;
    /// callers can tell "nothing to do" from "everything failed" via
    /// [`BatchSummary::is_empty`].
    pub async fn run(&mut self, rows: Vec<TradeRow>, dry_run: bool) -> BatchSummary {
        let mut summary = BatchSummary::new();

        if rows.is_empty() {
            info!("batch is empty; nothing to do");
            return summary;
        }

        info!(rows = rows.len(), dry_run, "starting batch");
        for row in rows {
            let tag = self.tags.next(&row.symbol);
            let request = TradeRequest::from_row(row, tag);
            let outcome = self.executor.execute(request, dry_run).await;
            if !outcome.succeeded {
                warn!(
                    symbol = %outcome.request.symbol,
                    detail = %outcome.detail,
                    "row failed; continuing"
                );
            }
            summary.record(outcome);
        }

        info!(
            attempted = summary.attempted(),
            succeeded = summary.succeeded,
            failed = summary.failed,
            "batch complete"
        );
        summary
    }
}
