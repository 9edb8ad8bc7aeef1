//! Concrete backends for the collaborator ports.
//!
//! Each adapter is swappable behind its port trait; the services never name
//! these types directly.

/// Simulated payment gateway
pub mod gateway;
/// In-memory ledger store
pub mod memory_ledger;
/// Log-based notification channel
pub mod notifier;
