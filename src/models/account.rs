//! Account ledger entity and its mutation rules.
//!
//! This module defines:
//! - `Account`: balance plus rolling daily-debit-limit state
//! - `AccountError`: the ways a debit can be refused
//!
//! # Money Representation
//!
//! Balances and amounts are `rust_decimal::Decimal` to avoid floating-point
//! precision issues. Amounts are never stored or compared as floats.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

/// Reasons a debit is refused by the account itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// Balance is lower than the requested debit amount.
    #[error("Insufficient funds.")]
    InsufficientFunds,

    /// The debit would push the rolling daily-debited total past the ceiling.
    #[error("Daily debit limit exceeded.")]
    DailyLimitExceeded,
}

/// A customer account as held by the ledger.
///
/// # Identity and Ownership
///
/// `account_id`, `owner_name` and `currency` are fixed at construction. The
/// persistence collaborator owns the durable record; callers work on a copy
/// for the duration of one operation and hand it back through a commit.
///
/// # Daily Debit Window
///
/// Debits are capped per calendar day. `daily_debited_amount` only ever
/// reflects debits dated on `daily_limit_date`; the first limit check that
/// observes a later date resets the window before evaluating.
#[derive(Debug, Clone)]
pub struct Account {
    account_id: String,
    owner_name: String,
    currency: String,
    balance: Decimal,
    daily_debit_limit: Decimal,
    daily_limit_date: NaiveDate,
    daily_debited_amount: Decimal,
}

impl Account {
    /// Open an account with the given balance and daily debit ceiling.
    ///
    /// The daily-limit window starts on the current UTC date with nothing
    /// debited yet.
    pub fn new(
        account_id: impl Into<String>,
        owner_name: impl Into<String>,
        currency: impl Into<String>,
        opening_balance: Decimal,
        daily_debit_limit: Decimal,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            owner_name: owner_name.into(),
            currency: currency.into(),
            balance: opening_balance,
            daily_debit_limit,
            daily_limit_date: Utc::now().date_naive(),
            daily_debited_amount: Decimal::ZERO,
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn daily_debit_limit(&self) -> Decimal {
        self.daily_debit_limit
    }

    pub fn daily_limit_date(&self) -> NaiveDate {
        self.daily_limit_date
    }

    pub fn daily_debited_amount(&self) -> Decimal {
        self.daily_debited_amount
    }

    /// Whether the balance covers `amount`.
    pub fn has_sufficient_balance(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// Case-insensitive comparison against the account's currency code.
    pub fn is_same_currency(&self, currency: &str) -> bool {
        self.currency.eq_ignore_ascii_case(currency)
    }

    /// Whether a debit of `amount` fits the daily window for `today`.
    ///
    /// This is an advance-if-stale operation, not a pure query: when `today`
    /// differs from the stored window date, the window is reset (date moved
    /// forward, debited total zeroed) before the check is evaluated. Every
    /// limit check can therefore advance the window, whether or not a debit
    /// follows.
    pub fn is_within_daily_limit(&mut self, amount: Decimal, today: NaiveDate) -> bool {
        if today != self.daily_limit_date {
            // new day; reset counter
            self.daily_limit_date = today;
            self.daily_debited_amount = Decimal::ZERO;
        }

        self.daily_debited_amount + amount <= self.daily_debit_limit
    }

    /// Remove `amount` from the balance, counting it against the daily window.
    ///
    /// Refuses with [`AccountError::InsufficientFunds`] or
    /// [`AccountError::DailyLimitExceeded`]. Non-positive amounts are not
    /// rejected here; the orchestration layer screens those out.
    pub fn debit(&mut self, amount: Decimal, today: NaiveDate) -> Result<(), AccountError> {
        if !self.has_sufficient_balance(amount) {
            return Err(AccountError::InsufficientFunds);
        }

        if !self.is_within_daily_limit(amount, today) {
            return Err(AccountError::DailyLimitExceeded);
        }

        self.balance -= amount;
        self.daily_debited_amount += amount;
        Ok(())
    }

    /// Add `amount` to the balance.
    ///
    /// Unconditional; credits do not consume the debit limit.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}
