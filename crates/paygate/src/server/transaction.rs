use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use paygate_core::TransactionInfo;

use super::error::{map_core_error, AppError};
use super::SharedState;

const TXID_REQUIRED: &str = "txid parameter is required";

pub(super) async fn get_transaction_info(
    State(state): State<SharedState>,
    txid: Result<Path<String>, PathRejection>,
) -> Result<Json<TransactionInfo>, AppError> {
    let Path(txid) = txid?;
    if txid.trim().is_empty() {
        return Err(AppError::BadRequest(TXID_REQUIRED.to_string()));
    }

    let tx = state
        .provider
        .get_transaction_info(&txid)
        .await
        .map_err(|e| map_core_error("get_transaction_info", e))?;

    tracing::debug!(%txid, value = tx.value, time = tx.time, "transaction lookup");
    Ok(Json(tx))
}

/// `GET /v1/transaction/` with the path segment left out.
pub(super) async fn missing_txid() -> AppError {
    AppError::BadRequest(TXID_REQUIRED.to_string())
}
