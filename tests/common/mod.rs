//! Shared stub collaborators for service and API tests.
//!
//! Each stub implements one port with scripted behavior and records the
//! calls it receives, so tests can assert on what the orchestration did
//! without any real backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use transfer_service::models::account::Account;
use transfer_service::models::payment::PaymentOutcome;
use transfer_service::models::transfer::Transfer;
use transfer_service::ports::{LedgerStore, PaymentGateway, TransferNotifier};
use transfer_service::services::transfers::TransferOrchestrator;

/// One recorded atomic commit.
#[derive(Debug, Clone)]
pub struct Commit {
    pub from: Account,
    pub to: Account,
    pub transfer: Transfer,
}

/// Scripted ledger store backed by a plain map.
#[derive(Default)]
pub struct StubLedger {
    accounts: Mutex<HashMap<String, Account>>,
    commits: Mutex<Vec<Commit>>,
    fail_lookups: bool,
    fail_commits: bool,
}

impl StubLedger {
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let map = accounts
            .into_iter()
            .map(|account| (account.account_id().to_string(), account))
            .collect();
        Self {
            accounts: Mutex::new(map),
            ..Default::default()
        }
    }

    /// Every lookup returns an error.
    pub fn failing_lookups() -> Self {
        Self {
            fail_lookups: true,
            ..Default::default()
        }
    }

    /// Every commit returns an error without changing anything.
    pub fn failing_commits(mut self) -> Self {
        self.fail_commits = true;
        self
    }

    pub fn commit_count(&self) -> usize {
        self.commits.lock().unwrap().len()
    }

    pub fn last_commit(&self) -> Option<Commit> {
        self.commits.lock().unwrap().last().cloned()
    }

    /// Account state as durably committed so far.
    pub fn stored_account(&self, account_id: &str) -> Option<Account> {
        self.accounts.lock().unwrap().get(account_id).cloned()
    }
}

#[async_trait]
impl LedgerStore for StubLedger {
    async fn lookup_account(&self, account_id: &str) -> anyhow::Result<Option<Account>> {
        if self.fail_lookups {
            anyhow::bail!("ledger backend offline");
        }
        Ok(self.accounts.lock().unwrap().get(account_id).cloned())
    }

    async fn commit(
        &self,
        from: &Account,
        to: &Account,
        transfer: &Transfer,
    ) -> anyhow::Result<()> {
        if self.fail_commits {
            anyhow::bail!("commit rejected");
        }

        let mut accounts = self.accounts.lock().unwrap();
        accounts.insert(from.account_id().to_string(), from.clone());
        accounts.insert(to.account_id().to_string(), to.clone());
        drop(accounts);

        self.commits.lock().unwrap().push(Commit {
            from: from.clone(),
            to: to.clone(),
            transfer: transfer.clone(),
        });
        Ok(())
    }
}

/// What the stub gateway does with a settlement attempt.
pub enum Settlement {
    Approve(String),
    Decline(String),
    Fault(String),
}

/// Scripted payment gateway counting its calls.
pub struct StubGateway {
    settlement: Settlement,
    calls: Mutex<usize>,
}

impl StubGateway {
    pub fn approving(external_reference: &str) -> Self {
        Self {
            settlement: Settlement::Approve(external_reference.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn declining(reason: &str) -> Self {
        Self {
            settlement: Settlement::Decline(reason.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn faulting(error: &str) -> Self {
        Self {
            settlement: Settlement::Fault(error.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn settle(&self, _transfer: &Transfer) -> anyhow::Result<PaymentOutcome> {
        *self.calls.lock().unwrap() += 1;
        match &self.settlement {
            Settlement::Approve(reference) => Ok(PaymentOutcome::approved(reference.clone())),
            Settlement::Decline(reason) => Ok(PaymentOutcome::declined(reason.clone())),
            Settlement::Fault(error) => Err(anyhow::anyhow!(error.clone())),
        }
    }
}

/// Notifier recording every message it was asked to send.
#[derive(Default)]
pub struct StubNotifier {
    messages: Mutex<Vec<String>>,
}

impl StubNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransferNotifier for StubNotifier {
    async fn notify(&self, _transfer: &Transfer, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Account with USD currency and the given whole-number balance/limit.
pub fn usd_account(account_id: &str, balance: i64, daily_limit: i64) -> Account {
    Account::new(
        account_id,
        "Test Owner",
        "USD",
        Decimal::from(balance),
        Decimal::from(daily_limit),
    )
}

/// Orchestrator wired onto the given stubs.
pub fn orchestrator(
    ledger: Arc<StubLedger>,
    gateway: Arc<StubGateway>,
    notifier: Arc<StubNotifier>,
) -> TransferOrchestrator {
    TransferOrchestrator::new(ledger, gateway, notifier)
}
