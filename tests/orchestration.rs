//! Transfer orchestration scenarios against scripted collaborators.
//!
//! These tests drive `TransferOrchestrator::execute_transfer` end to end and
//! assert both the returned envelope and the state observable through the
//! ledger stub: what was committed, whether settlement was attempted and
//! what the notifier was told.

mod common;

use std::sync::Arc;

use common::*;
use rust_decimal::Decimal;
use transfer_service::models::account::Account;
use transfer_service::models::transfer::TransferStatus;
use transfer_service::result::FailureKind;
use transfer_service::services::transfers::TransferCommand;

fn command(amount: i64) -> TransferCommand {
    TransferCommand::new(
        "ACC001",
        "ACC002",
        Decimal::from(amount),
        "USD",
        "Payment for services",
        Some("corr-1".to_string()),
    )
}

#[tokio::test]
async fn completed_transfer_moves_funds_and_reports_outcome() {
    let ledger = Arc::new(StubLedger::with_accounts([
        usd_account("ACC001", 1000, 500),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway.clone(), notifier.clone());

    let result = service.execute_transfer(command(200)).await;

    assert!(result.is_success());
    assert_eq!(result.status_code(), 200);
    assert_eq!(result.message(), "Transfer completed successfully.");
    assert_eq!(result.correlation_id(), Some("corr-1"));

    let outcome = result.data().unwrap();
    assert!(!outcome.transfer_id.is_empty());
    assert_eq!(outcome.status, TransferStatus::Completed);
    assert_eq!(outcome.external_reference.as_deref(), Some("EXT123"));

    // Ledger observes the debit, the credit and the completed record
    assert_eq!(
        ledger.stored_account("ACC001").unwrap().balance(),
        Decimal::from(800)
    );
    assert_eq!(
        ledger.stored_account("ACC002").unwrap().balance(),
        Decimal::from(200)
    );
    assert_eq!(ledger.commit_count(), 2);
    let committed = ledger.last_commit().unwrap().transfer;
    assert_eq!(committed.status(), TransferStatus::Completed);
    assert_eq!(committed.failure_reason(), None);

    assert_eq!(gateway.calls(), 1);
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("completed successfully"));
}

#[tokio::test]
async fn unknown_account_yields_not_found_without_mutation() {
    let ledger = Arc::new(StubLedger::with_accounts([usd_account(
        "ACC001", 1000, 500,
    )]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway.clone(), notifier);

    let result = service.execute_transfer(command(200)).await;

    assert!(!result.is_success());
    assert_eq!(result.status_code(), 404);
    assert!(result.message().contains("not found"));
    assert_eq!(result.correlation_id(), Some("corr-1"));
    assert_eq!(ledger.commit_count(), 0);
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn currency_mismatch_rejected_before_any_commit() {
    let ledger = Arc::new(StubLedger::with_accounts([
        Account::new("ACC001", "Bob", "EUR", Decimal::from(1000), Decimal::from(500)),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway.clone(), notifier);

    let result = service.execute_transfer(command(200)).await;

    assert_eq!(result.status_code(), 400);
    assert_eq!(result.message(), "Transfer rejected: Currency mismatch.");
    assert_eq!(ledger.commit_count(), 0);
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn insufficient_funds_rejected() {
    let ledger = Arc::new(StubLedger::with_accounts([
        usd_account("ACC001", 100, 500),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway.clone(), notifier);

    let result = service.execute_transfer(command(200)).await;

    assert_eq!(result.status_code(), 400);
    assert_eq!(result.failure_kind(), Some(FailureKind::Validation));
    assert!(result.message().contains("Insufficient funds"));
    assert_eq!(ledger.commit_count(), 0);
    assert_eq!(
        ledger.stored_account("ACC001").unwrap().balance(),
        Decimal::from(100)
    );
}

#[tokio::test]
async fn daily_limit_exceeded_rejected() {
    let ledger = Arc::new(StubLedger::with_accounts([
        usd_account("ACC001", 1000, 100),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway, notifier);

    let result = service.execute_transfer(command(200)).await;

    assert_eq!(result.status_code(), 400);
    assert_eq!(
        result.message(),
        "Transfer rejected: Daily transfer limit exceeded."
    );
    assert_eq!(ledger.commit_count(), 0);
}

#[tokio::test]
async fn non_positive_amount_rejected() {
    let ledger = Arc::new(StubLedger::with_accounts([
        usd_account("ACC001", 1000, 500),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway, notifier);

    let result = service.execute_transfer(command(0)).await;

    assert_eq!(result.status_code(), 400);
    assert_eq!(
        result.message(),
        "Transfer rejected: Transfer amount must be positive."
    );
    assert_eq!(ledger.commit_count(), 0);
}

#[tokio::test]
async fn transfer_to_same_account_rejected_regardless_of_balance() {
    let ledger = Arc::new(StubLedger::with_accounts([usd_account(
        "ACC001", 1000, 500,
    )]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway, notifier);

    let result = service
        .execute_transfer(TransferCommand::new(
            "ACC001",
            "ACC001",
            Decimal::from(100),
            "USD",
            "Payment",
            Some("corr-1".to_string()),
        ))
        .await;

    assert_eq!(result.status_code(), 400);
    assert_eq!(
        result.message(),
        "Transfer rejected: Source and destination accounts must be different."
    );
    assert_eq!(ledger.commit_count(), 0);
}

#[tokio::test]
async fn persistence_failure_skips_settlement() {
    let ledger = Arc::new(
        StubLedger::with_accounts([
            usd_account("ACC001", 1000, 500),
            usd_account("ACC002", 0, 500),
        ])
        .failing_commits(),
    );
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway.clone(), notifier.clone());

    let result = service.execute_transfer(command(200)).await;

    assert_eq!(result.status_code(), 500);
    assert_eq!(result.failure_kind(), Some(FailureKind::Persistence));
    assert_eq!(
        result.message(),
        "Could not persist transfer and account updates."
    );
    assert_eq!(result.correlation_id(), Some("corr-1"));

    // No settlement, no notification, no durable change
    assert_eq!(gateway.calls(), 0);
    assert!(notifier.messages().is_empty());
    assert_eq!(
        ledger.stored_account("ACC001").unwrap().balance(),
        Decimal::from(1000)
    );
}

#[tokio::test]
async fn settlement_failure_records_failed_transfer_and_keeps_ledger_mutation() {
    let ledger = Arc::new(StubLedger::with_accounts([
        usd_account("ACC001", 1000, 500),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::declining("External system unavailable"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway.clone(), notifier.clone());

    let result = service.execute_transfer(command(200)).await;

    assert!(!result.is_success());
    assert_eq!(result.status_code(), 502);
    assert_eq!(result.failure_kind(), Some(FailureKind::Settlement));
    assert!(result.message().contains("External system unavailable"));
    assert_eq!(result.correlation_id(), Some("corr-1"));

    // The failed transfer is durable, and the debit/credit stays in place
    let committed = ledger.last_commit().unwrap().transfer;
    assert_eq!(committed.status(), TransferStatus::Failed);
    assert_eq!(
        committed.failure_reason(),
        Some("External system unavailable")
    );
    assert_eq!(
        ledger.stored_account("ACC001").unwrap().balance(),
        Decimal::from(800)
    );
    assert_eq!(
        ledger.stored_account("ACC002").unwrap().balance(),
        Decimal::from(200)
    );
    assert_eq!(ledger.commit_count(), 2);

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("failed"));
    assert!(messages[0].contains("External system unavailable"));
}

#[tokio::test]
async fn gateway_fault_is_caught_as_unexpected_failure() {
    let ledger = Arc::new(StubLedger::with_accounts([
        usd_account("ACC001", 1000, 500),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::faulting("connection reset"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger.clone(), gateway, notifier);

    let result = service.execute_transfer(command(200)).await;

    assert_eq!(result.status_code(), 500);
    assert_eq!(result.failure_kind(), Some(FailureKind::Unexpected));
    assert!(result.message().starts_with("Unexpected error during transfer:"));
    assert_eq!(result.correlation_id(), Some("corr-1"));

    // The pending record from the first commit is all that exists
    let committed = ledger.last_commit().unwrap().transfer;
    assert_eq!(committed.status(), TransferStatus::Pending);
}

#[tokio::test]
async fn lookup_fault_is_caught_as_unexpected_failure() {
    let ledger = Arc::new(StubLedger::failing_lookups());
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger, gateway.clone(), notifier);

    let result = service.execute_transfer(command(200)).await;

    assert_eq!(result.status_code(), 500);
    assert!(result.message().contains("Unexpected error during transfer"));
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn generated_correlation_id_is_echoed_back() {
    let ledger = Arc::new(StubLedger::with_accounts([
        usd_account("ACC001", 1000, 500),
        usd_account("ACC002", 0, 500),
    ]));
    let gateway = Arc::new(StubGateway::approving("EXT123"));
    let notifier = Arc::new(StubNotifier::default());
    let service = orchestrator(ledger, gateway, notifier);

    let command = TransferCommand::new(
        "ACC001",
        "ACC002",
        Decimal::from(50),
        "USD",
        "Payment",
        None,
    );
    let generated = command.correlation_id.clone();

    let result = service.execute_transfer(command).await;

    assert_eq!(result.correlation_id(), Some(generated.as_str()));
}
