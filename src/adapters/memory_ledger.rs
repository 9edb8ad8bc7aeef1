//! In-memory implementation of the ledger store.
//!
//! Accounts and transfer records live in hash maps behind one mutex owned by
//! the adapter instance, which serializes every lookup and commit. That is
//! the whole concurrency discipline the `LedgerStore` contract asks for:
//! while one commit runs, no other transfer can observe a half-written pair
//! of accounts. A production deployment would swap this adapter for a
//! transactional database behind the same trait.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::models::account::Account;
use crate::models::transfer::Transfer;
use crate::ports::LedgerStore;

#[derive(Default)]
struct LedgerState {
    accounts: HashMap<String, Account>,
    transfers: HashMap<String, Transfer>,
}

/// Hash-map backed ledger guarded by a single lock.
#[derive(Default)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-populated with the demo account set.
    pub fn with_seed_accounts() -> Self {
        let mut accounts = HashMap::new();
        for account in [
            Account::new("ACC001", "John Doe", "USD", Decimal::from(5000), Decimal::from(1000)),
            Account::new("ACC002", "Jane Smith", "USD", Decimal::from(2500), Decimal::from(500)),
            Account::new("ACC003", "Bob Johnson", "EUR", Decimal::from(3000), Decimal::from(750)),
            Account::new("ACC004", "Alice Brown", "USD", Decimal::from(10_000), Decimal::from(2000)),
            Account::new("ACC005", "Charlie Wilson", "GBP", Decimal::from(4500), Decimal::from(800)),
        ] {
            accounts.insert(account.account_id().to_string(), account);
        }

        Self {
            state: Mutex::new(LedgerState {
                accounts,
                transfers: HashMap::new(),
            }),
        }
    }

    /// Insert or replace an account record outside of a transfer commit.
    pub fn insert_account(&self, account: Account) -> anyhow::Result<()> {
        let mut state = self.locked()?;
        state
            .accounts
            .insert(account.account_id().to_string(), account);
        Ok(())
    }

    /// Read back a stored transfer record by id.
    pub fn transfer(&self, transfer_id: &str) -> anyhow::Result<Option<Transfer>> {
        Ok(self.locked()?.transfers.get(transfer_id).cloned())
    }

    fn locked(&self) -> anyhow::Result<MutexGuard<'_, LedgerState>> {
        self.state
            .lock()
            .map_err(|_| anyhow::anyhow!("ledger state lock poisoned"))
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn lookup_account(&self, account_id: &str) -> anyhow::Result<Option<Account>> {
        let state = self.locked()?;
        let account = state.accounts.get(account_id).cloned();
        tracing::debug!(
            account_id,
            found = account.is_some(),
            "ledger account lookup"
        );
        Ok(account)
    }

    async fn commit(
        &self,
        from: &Account,
        to: &Account,
        transfer: &Transfer,
    ) -> anyhow::Result<()> {
        let mut state = self.locked()?;

        // Single critical section: both account snapshots and the transfer
        // record become visible together
        state
            .accounts
            .insert(from.account_id().to_string(), from.clone());
        state
            .accounts
            .insert(to.account_id().to_string(), to.clone());
        state
            .transfers
            .insert(transfer.transfer_id().to_string(), transfer.clone());

        tracing::info!(
            transfer_id = %transfer.transfer_id(),
            status = %transfer.status(),
            from = %from.account_id(),
            to = %to.account_id(),
            "ledger commit applied"
        );
        Ok(())
    }
}
