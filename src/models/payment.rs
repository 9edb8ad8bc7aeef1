//! Result of one settlement attempt at the payment gateway.

/// Outcome reported by the payment gateway for a single settlement attempt.
///
/// A declined settlement carries the gateway's reason; an approved one
/// carries the gateway's external reference. Plain value type, produced once
/// per attempt.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    success: bool,
    failure_reason: Option<String>,
    external_reference: Option<String>,
}

impl PaymentOutcome {
    /// Settlement succeeded with the gateway's reference.
    pub fn approved(external_reference: impl Into<String>) -> Self {
        Self {
            success: true,
            failure_reason: None,
            external_reference: Some(external_reference.into()),
        }
    }

    /// Settlement was declined for the given reason.
    pub fn declined(failure_reason: impl Into<String>) -> Self {
        Self {
            success: false,
            failure_reason: Some(failure_reason.into()),
            external_reference: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn external_reference(&self) -> Option<&str> {
        self.external_reference.as_deref()
    }
}
