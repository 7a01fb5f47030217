use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::application::engine::PurchaseOutcome;
use crate::error::{StoreError, TillError};

use super::routes::AppState;

pub const EXPENSIVE_COFFEE_ADVISORY: &str = "Do you really want such expensive coffee?";

#[derive(Deserialize)]
pub struct PurchaseRequest {
    amount: Decimal,
}

/// `POST /api/coffee`: validates and classifies the purchase amount,
/// recording a transaction for every classified purchase.
pub async fn submit_purchase(
    State(state): State<AppState>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Response {
    // A body without a parsable `amount` is an input error, not an internal
    // fault.
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    match state.engine.submit_purchase(request.amount).await {
        Ok(PurchaseOutcome::Recorded { coffee_type }) => {
            (StatusCode::OK, Json(json!({ "coffee_type": coffee_type }))).into_response()
        }
        Ok(PurchaseOutcome::Advisory) => (
            StatusCode::OK,
            Json(json!({ "message": EXPENSIVE_COFFEE_ADVISORY })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: TillError) -> Response {
    let (status, body) = match &e {
        TillError::InvalidAmount => (StatusCode::BAD_REQUEST, json!({ "message": e.to_string() })),
        TillError::Store(StoreError::DuplicateId) => {
            (StatusCode::CONFLICT, json!({ "error": e.to_string() }))
        }
        _ => {
            error!("purchase submission failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": e.to_string() }),
            )
        }
    };

    (status, Json(body)).into_response()
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Prometheus text exposition of the recorded request metrics.
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
