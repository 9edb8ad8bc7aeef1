//! Uniform operation envelope returned by every service entry point.
//!
//! Services never let a raw error escape to their callers for expected
//! failure conditions; everything is folded into an [`OperationResult`] that
//! carries the outcome, a human-readable message, a creation timestamp and
//! the caller's correlation id when one was supplied.

use chrono::{DateTime, Utc};

/// Failure taxonomy shared by all operations, each kind pinned to the HTTP
/// status code that is part of the service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input violates a business rule or is malformed (400).
    Validation,
    /// A referenced account does not exist (404).
    NotFound,
    /// The persistence collaborator could not durably commit (500).
    Persistence,
    /// The payment gateway reported the settlement as failed (502).
    Settlement,
    /// Any fault caught at the service boundary (500).
    Unexpected,
}

impl FailureKind {
    pub fn status_code(self) -> u16 {
        match self {
            FailureKind::Validation => 400,
            FailureKind::NotFound => 404,
            FailureKind::Persistence | FailureKind::Unexpected => 500,
            FailureKind::Settlement => 502,
        }
    }
}

/// Tagged success-or-failure envelope.
///
/// The success variant carries the operation's payload; the failure variant
/// carries the [`FailureKind`] that determines its status code. Both carry
/// message, timestamp and optional correlation id, so callers can render a
/// uniform response without inspecting the variant.
#[derive(Debug, Clone)]
pub enum OperationResult<T> {
    Success {
        data: T,
        message: String,
        timestamp: DateTime<Utc>,
        correlation_id: Option<String>,
    },
    Failure {
        kind: FailureKind,
        message: String,
        timestamp: DateTime<Utc>,
        correlation_id: Option<String>,
    },
}

impl<T> OperationResult<T> {
    pub fn success(
        data: T,
        message: impl Into<String>,
        correlation_id: Option<String>,
    ) -> Self {
        OperationResult::Success {
            data,
            message: message.into(),
            timestamp: Utc::now(),
            correlation_id,
        }
    }

    pub fn failure(
        kind: FailureKind,
        message: impl Into<String>,
        correlation_id: Option<String>,
    ) -> Self {
        OperationResult::Failure {
            kind,
            message: message.into(),
            timestamp: Utc::now(),
            correlation_id,
        }
    }

    pub fn validation_error(message: impl Into<String>, correlation_id: Option<String>) -> Self {
        Self::failure(FailureKind::Validation, message, correlation_id)
    }

    pub fn not_found(message: impl Into<String>, correlation_id: Option<String>) -> Self {
        Self::failure(FailureKind::NotFound, message, correlation_id)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    /// 200 for success, otherwise the failure kind's status code.
    pub fn status_code(&self) -> u16 {
        match self {
            OperationResult::Success { .. } => 200,
            OperationResult::Failure { kind, .. } => kind.status_code(),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            OperationResult::Success { .. } => None,
            OperationResult::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            OperationResult::Success { message, .. }
            | OperationResult::Failure { message, .. } => message,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            OperationResult::Success { timestamp, .. }
            | OperationResult::Failure { timestamp, .. } => *timestamp,
        }
    }

    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            OperationResult::Success { correlation_id, .. }
            | OperationResult::Failure { correlation_id, .. } => correlation_id.as_deref(),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            OperationResult::Success { data, .. } => Some(data),
            OperationResult::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            OperationResult::Success { data, .. } => Some(data),
            OperationResult::Failure { .. } => None,
        }
    }
}
