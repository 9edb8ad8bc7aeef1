//! Collaborator contracts consumed by the services.
//!
//! The core depends on three narrow ports: durable ledger storage, payment
//! settlement and notification. Concrete backends live in `adapters`; tests
//! substitute stubs. All ports are object-safe so services can hold them as
//! `Arc<dyn ...>`.

use async_trait::async_trait;

use crate::models::account::Account;
use crate::models::payment::PaymentOutcome;
use crate::models::transfer::Transfer;

/// Durable storage for accounts and transfer records.
///
/// The store owns all serialization of concurrent access: two transfers
/// touching the same account must not interleave their read-modify-write
/// windows. The orchestrator itself takes no locks.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Fetch a point-in-time copy of an account, or `None` if unknown.
    async fn lookup_account(&self, account_id: &str) -> anyhow::Result<Option<Account>>;

    /// Durably write both account states and the transfer record as one
    /// atomic unit. An `Err` means nothing was changed.
    async fn commit(
        &self,
        from: &Account,
        to: &Account,
        transfer: &Transfer,
    ) -> anyhow::Result<()>;
}

/// External payment gateway performing the real-world funds movement.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Attempt settlement of the transfer.
    ///
    /// A declined settlement is a *successful* call returning an unsuccessful
    /// [`PaymentOutcome`]; `Err` is reserved for transport-level faults.
    async fn settle(&self, transfer: &Transfer) -> anyhow::Result<PaymentOutcome>;
}

/// Outbound notification channel, fire-and-forget.
///
/// Delivery failures are the implementation's problem; they are never
/// surfaced to the orchestrator.
#[async_trait]
pub trait TransferNotifier: Send + Sync {
    async fn notify(&self, transfer: &Transfer, message: &str);
}
