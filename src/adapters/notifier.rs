//! Log-based notification channel.
//!
//! Emits structured tracing events instead of reaching an external channel.
//! Fire-and-forget per the `TransferNotifier` contract.

use async_trait::async_trait;

use crate::models::transfer::Transfer;
use crate::ports::TransferNotifier;

pub struct LogNotifier;

#[async_trait]
impl TransferNotifier for LogNotifier {
    async fn notify(&self, transfer: &Transfer, message: &str) {
        tracing::info!(
            transfer_id = %transfer.transfer_id(),
            status = %transfer.status(),
            amount = %transfer.amount(),
            currency = %transfer.currency(),
            "{message}"
        );

        if let Some(reason) = transfer.failure_reason() {
            tracing::warn!(
                transfer_id = %transfer.transfer_id(),
                "failure reason: {reason}"
            );
        }
    }
}
