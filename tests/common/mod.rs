use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use coffee_till::application::engine::PurchaseEngine;
use coffee_till::domain::ports::TransactionStoreBox;
use coffee_till::infrastructure::in_memory::InMemoryTransactionStore;
use coffee_till::interfaces::http::metrics::install_recorder;
use coffee_till::interfaces::http::routes::{AppState, app_router};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use tower::ServiceExt;

// The recorder is process-global, so every test in this binary shares one
// handle.
fn metrics_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| install_recorder().expect("Prometheus recorder should install once"))
        .clone()
}

pub fn router_with_store(store: TransactionStoreBox) -> Router {
    let state = AppState {
        engine: Arc::new(PurchaseEngine::new(store)),
        metrics: metrics_handle(),
    };
    app_router(state)
}

/// Router wired to a fresh in-memory store; the returned handle shares the
/// same storage for assertions on what was persisted.
pub fn test_app() -> (Router, InMemoryTransactionStore) {
    let store = InMemoryTransactionStore::new();
    let router = router_with_store(Box::new(store.clone()));
    (router, store)
}

pub async fn post_coffee(app: &Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/coffee")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
