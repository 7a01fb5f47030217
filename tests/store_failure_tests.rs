use async_trait::async_trait;
use axum::http::StatusCode;
use coffee_till::domain::ports::TransactionStore;
use coffee_till::domain::transaction::Transaction;
use coffee_till::error::StoreError;
use serde_json::json;

mod common;
use common::{post_coffee, router_with_store};

/// Store stub that fails every insert with the configured error.
struct FailingStore {
    error: fn() -> StoreError,
}

#[async_trait]
impl TransactionStore for FailingStore {
    async fn insert(&self, _tx: Transaction) -> Result<(), StoreError> {
        Err((self.error)())
    }
}

#[tokio::test]
async fn test_duplicate_id_maps_to_conflict() {
    let app = router_with_store(Box::new(FailingStore {
        error: || StoreError::DuplicateId,
    }));

    let (status, body) = post_coffee(&app, r#"{"amount": 2.50}"#).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "error": "A transaction with the same ID already exists" })
    );
}

#[tokio::test]
async fn test_backend_failure_maps_to_internal_error() {
    let app = router_with_store(Box::new(FailingStore {
        error: || StoreError::Backend("connection reset by peer".into()),
    }));

    let (status, body) = post_coffee(&app, r#"{"amount": 2.50}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "connection reset by peer" }));
}

#[tokio::test]
async fn test_store_is_not_reached_for_rejected_or_advisory_amounts() {
    // Every insert would fail, so a non-500 response proves no write was
    // attempted.
    let app = router_with_store(Box::new(FailingStore {
        error: || StoreError::Backend("should never be called".into()),
    }));

    let (status, _) = post_coffee(&app, r#"{"amount": 0}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_coffee(&app, r#"{"amount": 15}"#).await;
    assert_eq!(status, StatusCode::OK);
}
