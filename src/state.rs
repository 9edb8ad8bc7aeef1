//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::ports::{LedgerStore, PaymentGateway, TransferNotifier};
use crate::services::inquiries::InquiryService;
use crate::services::transfers::TransferOrchestrator;

/// Service handles shared across requests via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub operations: Arc<TransferOrchestrator>,
    pub inquiries: Arc<InquiryService>,
}

impl AppState {
    /// Wire the services onto a set of collaborator ports.
    pub fn new(
        store: Arc<dyn LedgerStore>,
        gateway: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn TransferNotifier>,
    ) -> Self {
        Self {
            operations: Arc::new(TransferOrchestrator::new(store.clone(), gateway, notifier)),
            inquiries: Arc::new(InquiryService::new(store)),
        }
    }
}
