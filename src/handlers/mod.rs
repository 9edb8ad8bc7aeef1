//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Calls into the service layer
//! 3. Returns the service's envelope as a JSON response whose HTTP status
//!    mirrors the envelope's status code

/// Account inquiry endpoints
pub mod accounts;
/// Health and service info endpoints
pub mod health;
/// Transfer execution endpoint
pub mod transfers;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::result::OperationResult;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health_check))
        .route("/api/v1/transfers", post(transfers::execute_transfer))
        .route(
            "/api/v1/accounts/{account_id}",
            get(accounts::get_account_details),
        )
        .route(
            "/api/v1/accounts/{account_id}/balance",
            get(accounts::get_account_balance),
        )
        // Distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Open CORS so browser frontends can call the API directly
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Flat JSON rendering of an `OperationResult` envelope.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "status_code": 200,
///   "message": "Transfer completed successfully.",
///   "data": { "transfer_id": "..." },
///   "timestamp": "2026-08-04T10:00:00Z",
///   "correlation_id": "b2e9..."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl<T> From<OperationResult<T>> for ApiResponse<T> {
    fn from(result: OperationResult<T>) -> Self {
        match result {
            OperationResult::Success {
                data,
                message,
                timestamp,
                correlation_id,
            } => Self {
                success: true,
                status_code: 200,
                message,
                data: Some(data),
                timestamp,
                correlation_id,
            },
            OperationResult::Failure {
                kind,
                message,
                timestamp,
                correlation_id,
            } => Self {
                success: false,
                status_code: kind.status_code(),
                message,
                data: None,
                timestamp,
                correlation_id,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
