//! Transfer lifecycle record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Lifecycle state of a transfer.
///
/// Created as `Pending`; one orchestration run moves it to exactly one of the
/// terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransferStatus {
    Pending,
    Completed,
    Failed,
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::Completed => "Completed",
            TransferStatus::Failed => "Failed",
        };
        f.write_str(label)
    }
}

/// One transfer between two accounts.
///
/// Identity, amount and reference are fixed at construction; only the status
/// and failure reason change as the orchestration progresses. The failure
/// reason is present exactly while the status is `Failed`.
#[derive(Debug, Clone)]
pub struct Transfer {
    transfer_id: String,
    from_account_id: String,
    to_account_id: String,
    currency: String,
    amount: Decimal,
    reference: String,
    created_at: DateTime<Utc>,
    status: TransferStatus,
    failure_reason: Option<String>,
}

impl Transfer {
    /// Create a transfer record in `Pending` state.
    pub fn new(
        transfer_id: impl Into<String>,
        from_account_id: impl Into<String>,
        to_account_id: impl Into<String>,
        currency: impl Into<String>,
        amount: Decimal,
        reference: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            transfer_id: transfer_id.into(),
            from_account_id: from_account_id.into(),
            to_account_id: to_account_id.into(),
            currency: currency.into(),
            amount,
            reference: reference.into(),
            created_at,
            status: TransferStatus::Pending,
            failure_reason: None,
        }
    }

    pub fn transfer_id(&self) -> &str {
        &self.transfer_id
    }

    pub fn from_account_id(&self) -> &str {
        &self.from_account_id
    }

    pub fn to_account_id(&self) -> &str {
        &self.to_account_id
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> TransferStatus {
        self.status
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// Settle the transfer; any previously recorded failure reason is cleared.
    pub fn mark_completed(&mut self) {
        self.status = TransferStatus::Completed;
        self.failure_reason = None;
    }

    /// Record the transfer as failed with the given reason.
    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.status = TransferStatus::Failed;
        self.failure_reason = Some(reason.into());
    }
}
