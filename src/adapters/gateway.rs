//! Simulated payment gateway.
//!
//! Stands in for a real settlement provider: random processing latency and a
//! configurable decline rate. A production adapter would talk to the
//! provider's API behind the same `PaymentGateway` trait.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use crate::models::payment::PaymentOutcome;
use crate::models::transfer::Transfer;
use crate::ports::PaymentGateway;

const DECLINE_REASON: &str = "Payment gateway temporarily unavailable";

/// Gateway simulation with a fixed decline probability.
pub struct SimulatedGateway {
    failure_rate: f64,
}

impl SimulatedGateway {
    /// `failure_rate` is the decline probability in `[0.0, 1.0]`; 0 always
    /// approves, 1 always declines.
    pub fn new(failure_rate: f64) -> Self {
        Self { failure_rate }
    }

    fn external_reference() -> String {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        let suffix = rand::rng().random_range(1000..10_000);
        format!("PAY_{timestamp}_{suffix}")
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn settle(&self, transfer: &Transfer) -> anyhow::Result<PaymentOutcome> {
        tracing::info!(
            transfer_id = %transfer.transfer_id(),
            amount = %transfer.amount(),
            currency = %transfer.currency(),
            from = %transfer.from_account_id(),
            to = %transfer.to_account_id(),
            "processing payment"
        );

        // Simulate provider processing time
        let processing = rand::rng().random_range(100..800);
        tokio::time::sleep(Duration::from_millis(processing)).await;

        if rand::random::<f64>() >= self.failure_rate {
            let reference = Self::external_reference();
            tracing::info!(
                transfer_id = %transfer.transfer_id(),
                reference = %reference,
                "payment successful"
            );
            Ok(PaymentOutcome::approved(reference))
        } else {
            tracing::warn!(
                transfer_id = %transfer.transfer_id(),
                "payment failed: {DECLINE_REASON}"
            );
            Ok(PaymentOutcome::declined(DECLINE_REASON))
        }
    }
}
