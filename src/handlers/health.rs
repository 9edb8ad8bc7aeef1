//! Health check and service info endpoints.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Liveness probe; touches no collaborators.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Service landing page: architecture summary, endpoint list and the seeded
/// demo accounts.
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "message": "Money Transfer API",
        "architecture": {
            "pattern": "Ports & Adapters",
            "adapters": [
                "Ledger store (in-memory)",
                "Payment gateway (simulation)",
                "Notifications (log)"
            ]
        },
        "endpoints": {
            "transfers": "POST /api/v1/transfers",
            "accounts": "GET /api/v1/accounts/{accountId}",
            "balance": "GET /api/v1/accounts/{accountId}/balance",
            "health": "GET /health"
        },
        "sample_accounts": [
            { "account_id": "ACC001", "owner": "John Doe", "currency": "USD", "balance": "5000", "daily_limit": "1000" },
            { "account_id": "ACC002", "owner": "Jane Smith", "currency": "USD", "balance": "2500", "daily_limit": "500" },
            { "account_id": "ACC003", "owner": "Bob Johnson", "currency": "EUR", "balance": "3000", "daily_limit": "750" },
            { "account_id": "ACC004", "owner": "Alice Brown", "currency": "USD", "balance": "10000", "daily_limit": "2000" },
            { "account_id": "ACC005", "owner": "Charlie Wilson", "currency": "GBP", "balance": "4500", "daily_limit": "800" }
        ],
        "timestamp": Utc::now()
    }))
}
