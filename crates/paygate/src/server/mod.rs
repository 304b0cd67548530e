mod address;
mod error;
mod payment;
mod transaction;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};

use paygate_core::PaymentProvider;

// ==============================================================================
// Application State
// ==============================================================================

pub struct AppState {
    pub provider: Arc<dyn PaymentProvider>,
}

type SharedState = Arc<AppState>;

// ==============================================================================
// Router
// ==============================================================================

pub fn build_router(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let shared = Arc::new(state);

    let router = Router::new()
        .route("/v1/health", get(health))
        .route("/v1/payment", post(payment::create_payment))
        .route("/v1/address/", get(address::missing_address))
        .route("/v1/address/{address}", get(address::get_address_info))
        .route("/v1/new_address", get(address::issue_new_address))
        .route("/v1/transaction/", get(transaction::missing_txid))
        .route(
            "/v1/transaction/{txid}",
            get(transaction::get_transaction_info),
        )
        .fallback(route_not_found)
        .with_state(shared);

    match cors_origin {
        Some(origin) => router.layer(cors_layer(origin)),
        None => router,
    }
}

/// Reflect `allowed` only when the request's Origin header matches it, so
/// other browsers get a clean CORS rejection.
fn cors_layer(allowed: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |request_origin: &HeaderValue, _| *request_origin == allowed,
        ))
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn route_not_found() -> error::AppError {
    error::AppError::NotFound("route not found".to_string())
}
