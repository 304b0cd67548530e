use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use paygate_core::CreatePaymentResponse;

use super::error::{map_core_error, AppError};
use super::SharedState;

// ==============================================================================
// DTOs
// ==============================================================================

/// Raw query parameters. Kept as strings so amount parse failures carry our
/// own message; malformed query strings are mapped through `AppError`.
#[derive(Deserialize)]
pub(super) struct PaymentQuery {
    amount: Option<String>,
    callback_url: Option<String>,
}

// ==============================================================================
// Handler
// ==============================================================================

pub(super) async fn create_payment(
    State(state): State<SharedState>,
    query: Result<Query<PaymentQuery>, QueryRejection>,
) -> Result<Json<CreatePaymentResponse>, AppError> {
    let Query(query) = query?;
    let amount = parse_amount(query.amount.as_deref())?;

    let callback_url = query.callback_url.unwrap_or_default();
    if callback_url.is_empty() {
        return Err(AppError::BadRequest(
            "callback_url parameter is missing".to_string(),
        ));
    }

    let resp = state
        .provider
        .create_payment_address(amount, &callback_url)
        .await
        .map_err(|e| map_core_error("create_payment", e))?;

    tracing::info!(amount, address = %resp.address, status = %resp.status, "payment created");
    Ok(Json(resp))
}

fn parse_amount(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.ok_or_else(|| AppError::BadRequest("amount parameter is missing".to_string()))?;
    let amount: i64 = raw
        .parse()
        .map_err(|e| AppError::BadRequest(format!("invalid amount `{raw}`: {e}")))?;
    if amount <= 0 {
        return Err(AppError::BadRequest(format!(
            "amount must be a positive integer, got {amount}"
        )));
    }
    Ok(amount)
}
