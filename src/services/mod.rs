//! Business logic services.
//!
//! Services contain the core orchestration and inquiry logic separated from
//! HTTP handlers. They consume the collaborator ports and return
//! `OperationResult` envelopes.

pub mod inquiries;
pub mod transfers;
