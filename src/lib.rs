//! Money transfer service - core orchestration and supporting layers.
//!
//! The service executes transfers between two accounts, enforcing balance,
//! currency and daily-debit-limit rules, then hands the actual funds movement
//! to an external payment gateway and records the outcome.
//!
//! # Architecture
//!
//! - **Domain models** (`models`): `Account` ledger state, the `Transfer`
//!   lifecycle record and the `PaymentOutcome` value object
//! - **Ports** (`ports`): the three collaborator contracts the core consumes -
//!   ledger persistence, payment settlement, notification
//! - **Services** (`services`): the transfer orchestrator and read-only
//!   account inquiries, each returning a uniform `OperationResult` envelope
//! - **Adapters** (`adapters`): in-memory ledger, simulated gateway and
//!   log-based notifier backing the ports
//! - **HTTP layer** (`handlers`): Axum routes mapping requests onto the
//!   services and envelopes onto JSON responses

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod result;
pub mod services;
pub mod state;
