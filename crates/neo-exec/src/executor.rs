//! Single-trade execution.

use neo_broker::{OrderReceipt, OrderTicket, SessionManager};
use neo_core::{TradeOutcome, TradeRequest};
use tracing::{info, warn};

use crate::error::{ExecError, ExecResult};
use crate::resolver;

/// Executes one trade at a time against a shared session.
///
/// `execute` never returns an error: every failure (validation, soft
/// not-found, auth, transport, rejection) is converted into a failed
/// [`TradeOutcome`] so a batch can keep going past a bad row.
pub struct TradeExecutor {
    session: SessionManager,
}

impl TradeExecutor {
    pub fn new(session: SessionManager) -> Self {
        Self { session }
    }

    pub fn session_mut(&mut self) -> &mut SessionManager {
        &mut self.session
    }

    /// Execute one trade request.
    ///
    /// In dry-run mode nothing touches the network; the outcome is a
    /// synthesized success describing the order that would have been
    /// placed, so tallying downstream is identical in both modes.
    pub async fn execute(&mut self, request: TradeRequest, dry_run: bool) -> TradeOutcome {
        if let Err(e) = request.validate() {
            warn!(symbol = %request.symbol, error = %e, "trade rejected locally");
            return TradeOutcome::failure(request, e.to_string());
        }

        if dry_run {
            let detail = format!(
                "dry-run: would place {} {} x {} ({}) tagged {}",
                request.transaction_type,
                request.symbol,
                request.quantity,
                request.order_kind,
                request.tag,
            );
            info!(%detail);
            return TradeOutcome::success(request, detail);
        }

        match self.submit(&request).await {
            Ok(receipt) => {
                info!(symbol = %request.symbol, order_id = %receipt.order_id, "order placed");
                TradeOutcome::success(request, format!("order {} accepted", receipt.order_id))
            }
            Err(e) => {
                warn!(symbol = %request.symbol, error = %e, "order failed");
                TradeOutcome::failure(request, e.to_string())
            }
        }
    }

    /// Resolve the instrument and issue exactly one placement call
    /// (plus at most one auth-driven retry inside the session layer).
    async fn submit(&mut self, request: &TradeRequest) -> ExecResult<OrderReceipt> {
        let instrument = resolver::resolve(&mut self.session, &request.symbol)
            .await?
            .ok_or_else(|| ExecError::InstrumentNotFound(request.symbol.clone()))?;

        let ticket = OrderTicket {
            instrument,
            transaction_type: request.transaction_type,
            quantity: request.quantity,
            order_kind: request.order_kind,
            price: request.wire_price(),
            tag: request.tag.clone(),
        };

        Ok(self.session.place(ticket).await?)
    }
}
