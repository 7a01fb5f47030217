use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Router, middleware};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::application::engine::PurchaseEngine;

use super::handlers::{health, render_metrics, submit_purchase};
use super::metrics::track_requests;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PurchaseEngine>,
    pub metrics: PrometheusHandle,
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/coffee", post(submit_purchase))
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
