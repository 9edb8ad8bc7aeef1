//! Money Transfer Service - Main Application Entry Point
//!
//! REST API server that executes money transfers between accounts and serves
//! read-only account inquiries. Transfers are validated against balance,
//! currency and daily-limit rules, persisted through the ledger store and
//! settled through the payment gateway.
//!
//! # Startup Flow
//!
//! 1. Initialize structured logging
//! 2. Load configuration from environment variables
//! 3. Wire the collaborator adapters (in-memory ledger seeded with demo
//!    accounts, simulated gateway, log notifier)
//! 4. Build the HTTP router
//! 5. Start the server on the configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use transfer_service::adapters::gateway::SimulatedGateway;
use transfer_service::adapters::memory_ledger::InMemoryLedger;
use transfer_service::adapters::notifier::LogNotifier;
use transfer_service::config::Config;
use transfer_service::handlers;
use transfer_service::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment
    // variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Wire collaborator adapters behind their ports
    let ledger = Arc::new(InMemoryLedger::with_seed_accounts());
    let gateway = Arc::new(SimulatedGateway::new(config.gateway_failure_rate));
    let notifier = Arc::new(LogNotifier);
    tracing::info!(
        gateway_failure_rate = config.gateway_failure_rate,
        "Adapters configured: in-memory ledger, simulated gateway, log notifier"
    );

    let state = AppState::new(ledger, gateway, notifier);
    let app = handlers::router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
