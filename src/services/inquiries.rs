//! Read-only account inquiries.
//!
//! Two lookups, each validating the account id, fetching through the ledger
//! port and mapping onto a view with a fresh "as of" timestamp. No mutation,
//! no side effects beyond the read.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::account::Account;
use crate::ports::LedgerStore;
use crate::result::{FailureKind, OperationResult};

/// Full account view for detail inquiries.
#[derive(Debug, Clone, Serialize)]
pub struct AccountDetails {
    pub account_id: String,
    pub owner_name: String,
    pub currency: String,
    pub balance: Decimal,
    pub daily_debit_limit: Decimal,
    pub daily_debited_amount: Decimal,
    pub daily_limit_date: NaiveDate,
    pub last_updated: DateTime<Utc>,
}

/// Balance-only view.
///
/// Available equals current for now; a real system would subtract holds and
/// pending debits from available.
#[derive(Debug, Clone, Serialize)]
pub struct AccountBalance {
    pub account_id: String,
    pub available: Decimal,
    pub current: Decimal,
    pub currency: String,
    pub as_of: DateTime<Utc>,
}

/// Read-only account lookups through the envelope.
pub struct InquiryService {
    store: Arc<dyn LedgerStore>,
}

impl InquiryService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Fetch the full details view for an account.
    ///
    /// Blank id yields 400, unknown id 404; a failing lookup is reported as a
    /// 500 envelope rather than propagated.
    pub async fn get_account_details(&self, account_id: &str) -> OperationResult<AccountDetails> {
        if account_id.trim().is_empty() {
            return OperationResult::validation_error("Account ID is required.", None);
        }

        match self.store.lookup_account(account_id).await {
            Ok(Some(account)) => OperationResult::success(
                details_view(&account),
                "Account details retrieved successfully.",
                None,
            ),
            Ok(None) => {
                OperationResult::not_found(format!("Account {account_id} not found."), None)
            }
            Err(err) => OperationResult::failure(
                FailureKind::Unexpected,
                format!("Error retrieving account details: {err}"),
                None,
            ),
        }
    }

    /// Fetch the balance view for an account.
    pub async fn get_account_balance(&self, account_id: &str) -> OperationResult<AccountBalance> {
        if account_id.trim().is_empty() {
            return OperationResult::validation_error("Account ID is required.", None);
        }

        match self.store.lookup_account(account_id).await {
            Ok(Some(account)) => OperationResult::success(
                balance_view(&account),
                "Account balance retrieved successfully.",
                None,
            ),
            Ok(None) => {
                OperationResult::not_found(format!("Account {account_id} not found."), None)
            }
            Err(err) => OperationResult::failure(
                FailureKind::Unexpected,
                format!("Error retrieving account balance: {err}"),
                None,
            ),
        }
    }
}

fn details_view(account: &Account) -> AccountDetails {
    AccountDetails {
        account_id: account.account_id().to_string(),
        owner_name: account.owner_name().to_string(),
        currency: account.currency().to_string(),
        balance: account.balance(),
        daily_debit_limit: account.daily_debit_limit(),
        daily_debited_amount: account.daily_debited_amount(),
        daily_limit_date: account.daily_limit_date(),
        last_updated: Utc::now(),
    }
}

fn balance_view(account: &Account) -> AccountBalance {
    AccountBalance {
        account_id: account.account_id().to_string(),
        available: account.balance(),
        current: account.balance(),
        currency: account.currency().to_string(),
        as_of: Utc::now(),
    }
}
