//! Account inquiry HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /api/v1/accounts/{account_id} - Full account details
//! - GET /api/v1/accounts/{account_id}/balance - Balance view only

use axum::extract::{Path, State};

use crate::handlers::ApiResponse;
use crate::services::inquiries::{AccountBalance, AccountDetails};
use crate::state::AppState;

/// Get detailed account information.
///
/// # Response
///
/// - **200**: details view including the daily-limit window state
/// - **400**: blank account id
/// - **404**: account unknown
///
/// ```json
/// {
///   "success": true,
///   "status_code": 200,
///   "message": "Account details retrieved successfully.",
///   "data": {
///     "account_id": "ACC001",
///     "owner_name": "John Doe",
///     "currency": "USD",
///     "balance": "5000",
///     "daily_debit_limit": "1000",
///     "daily_debited_amount": "0",
///     "daily_limit_date": "2026-08-04",
///     "last_updated": "2026-08-04T10:00:00Z"
///   },
///   "timestamp": "2026-08-04T10:00:00Z"
/// }
/// ```
pub async fn get_account_details(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> ApiResponse<AccountDetails> {
    tracing::info!(account_id = %account_id, "retrieving account details");

    state.inquiries.get_account_details(&account_id).await.into()
}

/// Get account balance information.
///
/// Reports available and current balance (equal for now) with a fresh
/// as-of timestamp.
pub async fn get_account_balance(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> ApiResponse<AccountBalance> {
    tracing::info!(account_id = %account_id, "retrieving account balance");

    state.inquiries.get_account_balance(&account_id).await.into()
}
