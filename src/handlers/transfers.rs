//! Transfer HTTP handler.
//!
//! Implements `POST /api/v1/transfers` - execute a money transfer between
//! two accounts.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::handlers::ApiResponse;
use crate::services::transfers::{TransferCommand, TransferOutcome};
use crate::state::AppState;

/// Request body for executing a transfer.
///
/// # JSON Example
///
/// ```json
/// {
///   "from_account_id": "ACC001",
///   "to_account_id": "ACC002",
///   "amount": 200,
///   "currency": "USD",
///   "reference": "Invoice 42",
///   "correlation_id": "client-supplied-id"
/// }
/// ```
///
/// `correlation_id` is optional; one is generated when absent and echoed in
/// the response either way.
#[derive(Debug, Deserialize)]
pub struct MakeTransferRequest {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub reference: String,
    pub correlation_id: Option<String>,
}

/// Execute a money transfer.
///
/// # Response
///
/// The envelope's status code doubles as the HTTP status:
/// - **200**: transfer completed, payload carries id/status/external reference
/// - **400**: a validation rule rejected the request
/// - **404**: source or destination account unknown
/// - **500**: persistence or internal failure
/// - **502**: the payment gateway reported the settlement as failed
pub async fn execute_transfer(
    State(state): State<AppState>,
    Json(request): Json<MakeTransferRequest>,
) -> ApiResponse<TransferOutcome> {
    tracing::info!(
        from = %request.from_account_id,
        to = %request.to_account_id,
        amount = %request.amount,
        currency = %request.currency,
        "processing transfer request"
    );

    let command = TransferCommand::new(
        request.from_account_id,
        request.to_account_id,
        request.amount,
        request.currency,
        request.reference,
        request.correlation_id,
    );

    let result = state.operations.execute_transfer(command).await;

    tracing::info!(
        status_code = result.status_code(),
        correlation_id = result.correlation_id(),
        "transfer request completed: {}",
        result.message()
    );

    result.into()
}
