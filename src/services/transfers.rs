//! Transfer orchestration - core business logic for moving money.
//!
//! The orchestrator sequences one transfer end to end:
//!
//! 1. Load both accounts through the ledger port
//! 2. Run the validation chain (fixed order, first failure wins)
//! 3. Build the transfer record in `Pending`
//! 4. Debit the source and credit the destination in memory
//! 5. Commit both accounts and the pending transfer atomically
//! 6. Settle through the payment gateway
//! 7. Reconcile: mark the transfer `Completed` or `Failed`, commit again,
//!    notify
//!
//! Every path returns an [`OperationResult`] envelope; no error escapes the
//! public operation.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::account::Account;
use crate::models::transfer::{Transfer, TransferStatus};
use crate::ports::{LedgerStore, PaymentGateway, TransferNotifier};
use crate::result::{FailureKind, OperationResult};

/// First validation rule a transfer request breaks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Currency mismatch.")]
    CurrencyMismatch,
    #[error("Insufficient funds.")]
    InsufficientFunds,
    #[error("Daily transfer limit exceeded.")]
    DailyLimitExceeded,
    #[error("Transfer amount must be positive.")]
    AmountNotPositive,
    #[error("Source and destination accounts must be different.")]
    SameAccount,
}

/// One transfer request as handed to the orchestrator.
///
/// A correlation id is generated when the caller does not supply one, and is
/// echoed in the envelope on every path. Correlation ids are not deduplicated:
/// a retried request creates a new transfer.
#[derive(Debug, Clone)]
pub struct TransferCommand {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub reference: String,
    pub correlation_id: String,
}

impl TransferCommand {
    pub fn new(
        from_account_id: impl Into<String>,
        to_account_id: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        reference: impl Into<String>,
        correlation_id: Option<String>,
    ) -> Self {
        Self {
            from_account_id: from_account_id.into(),
            to_account_id: to_account_id.into(),
            amount,
            currency: currency.into(),
            reference: reference.into(),
            correlation_id: correlation_id
                .unwrap_or_else(|| Uuid::new_v4().simple().to_string()),
        }
    }
}

/// Outcome payload carried by a successful transfer envelope.
#[derive(Debug, Clone, Serialize)]
pub struct TransferOutcome {
    pub transfer_id: String,
    pub status: TransferStatus,
    pub message: String,
    pub processed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

/// Coordinates validation, ledger mutation, durable commit and external
/// settlement for one transfer at a time.
pub struct TransferOrchestrator {
    store: Arc<dyn LedgerStore>,
    gateway: Arc<dyn PaymentGateway>,
    notifier: Arc<dyn TransferNotifier>,
}

impl TransferOrchestrator {
    pub fn new(
        store: Arc<dyn LedgerStore>,
        gateway: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn TransferNotifier>,
    ) -> Self {
        Self {
            store,
            gateway,
            notifier,
        }
    }

    /// Execute a transfer and report the outcome as an envelope.
    ///
    /// Expected failures map to their contract status codes (400/404/500/502);
    /// anything else is caught here and reported as a 500 envelope carrying
    /// the fault's description and the request's correlation id.
    pub async fn execute_transfer(
        &self,
        command: TransferCommand,
    ) -> OperationResult<TransferOutcome> {
        let correlation_id = command.correlation_id.clone();

        match self.run(command).await {
            Ok(result) => result,
            Err(err) => OperationResult::failure(
                FailureKind::Unexpected,
                format!("Unexpected error during transfer: {err}"),
                Some(correlation_id),
            ),
        }
    }

    async fn run(
        &self,
        command: TransferCommand,
    ) -> anyhow::Result<OperationResult<TransferOutcome>> {
        let correlation_id = Some(command.correlation_id.clone());

        let from_account = self.store.lookup_account(&command.from_account_id).await?;
        let to_account = self.store.lookup_account(&command.to_account_id).await?;

        let (Some(mut from_account), Some(mut to_account)) = (from_account, to_account) else {
            return Ok(OperationResult::not_found(
                "Source or destination account not found.",
                correlation_id,
            ));
        };

        let now = Utc::now();
        let today = now.date_naive();

        if let Some(reason) = reject_reason(
            &mut from_account,
            &to_account,
            command.amount,
            &command.currency,
            today,
        ) {
            return Ok(OperationResult::validation_error(
                format!("Transfer rejected: {reason}"),
                correlation_id,
            ));
        }

        let transfer_id = Uuid::new_v4().simple().to_string();
        let mut transfer = Transfer::new(
            transfer_id,
            command.from_account_id,
            command.to_account_id,
            command.currency,
            command.amount,
            command.reference,
            now,
        );

        // Apply domain state changes to the copies loaded above
        from_account.debit(command.amount, today)?;
        to_account.credit(command.amount);

        // Persist both accounts and the pending transfer atomically; on
        // failure nothing was durably changed and settlement is not attempted
        if let Err(err) = self
            .store
            .commit(&from_account, &to_account, &transfer)
            .await
        {
            tracing::error!(
                transfer_id = %transfer.transfer_id(),
                "persistence commit failed: {err:#}"
            );
            return Ok(OperationResult::failure(
                FailureKind::Persistence,
                "Could not persist transfer and account updates.",
                correlation_id,
            ));
        }

        let payment = self.gateway.settle(&transfer).await?;

        if !payment.is_success() {
            let reason = payment
                .failure_reason()
                .unwrap_or("Payment gateway failure.")
                .to_string();
            transfer.mark_failed(reason.clone());

            // The debit/credit applied above stays in place; the failed
            // transfer is reconciled out-of-band
            self.persist_disposition(&from_account, &to_account, &transfer)
                .await;

            self.notifier
                .notify(
                    &transfer,
                    &format!("Transfer {} failed: {reason}", transfer.transfer_id()),
                )
                .await;

            return Ok(OperationResult::failure(
                FailureKind::Settlement,
                format!("Transfer failed: {reason}"),
                correlation_id,
            ));
        }

        transfer.mark_completed();
        self.persist_disposition(&from_account, &to_account, &transfer)
            .await;

        self.notifier
            .notify(
                &transfer,
                &format!(
                    "Transfer {} completed successfully.",
                    transfer.transfer_id()
                ),
            )
            .await;

        let outcome = TransferOutcome {
            transfer_id: transfer.transfer_id().to_string(),
            status: transfer.status(),
            message: "Transfer completed successfully.".to_string(),
            processed_at: now,
            external_reference: payment.external_reference().map(str::to_string),
        };

        Ok(OperationResult::success(
            outcome,
            "Transfer completed successfully.",
            correlation_id,
        ))
    }

    /// Re-commit the terminal disposition of a transfer.
    ///
    /// The envelope for this transfer is already decided at this point, so a
    /// failing commit is logged and otherwise ignored.
    async fn persist_disposition(&self, from: &Account, to: &Account, transfer: &Transfer) {
        if let Err(err) = self.store.commit(from, to, transfer).await {
            tracing::warn!(
                transfer_id = %transfer.transfer_id(),
                status = %transfer.status(),
                "could not persist transfer disposition: {err:#}"
            );
        }
    }
}

/// Evaluate the validation chain in its fixed order; the first failing rule
/// wins and becomes the caller-visible rejection.
///
/// The daily-limit check may advance the source account's limit window as a
/// side effect, which is why the source is borrowed mutably.
fn reject_reason(
    from: &mut Account,
    to: &Account,
    amount: Decimal,
    currency: &str,
    today: NaiveDate,
) -> Option<RejectReason> {
    if !from.is_same_currency(currency) || !to.is_same_currency(currency) {
        return Some(RejectReason::CurrencyMismatch);
    }

    if !from.has_sufficient_balance(amount) {
        return Some(RejectReason::InsufficientFunds);
    }

    if !from.is_within_daily_limit(amount, today) {
        return Some(RejectReason::DailyLimitExceeded);
    }

    if amount <= Decimal::ZERO {
        return Some(RejectReason::AmountNotPositive);
    }

    if from.account_id() == to.account_id() {
        return Some(RejectReason::SameAccount);
    }

    None
}
