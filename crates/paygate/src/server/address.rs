use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use paygate_core::AddressInfo;

use super::error::{map_core_error, AppError};
use super::SharedState;

const ADDRESS_REQUIRED: &str = "address parameter is required";

#[derive(Serialize)]
pub(super) struct NewAddressResponse {
    address: String,
}

pub(super) async fn get_address_info(
    State(state): State<SharedState>,
    address: Result<Path<String>, PathRejection>,
) -> Result<Json<AddressInfo>, AppError> {
    let Path(address) = address?;
    if address.trim().is_empty() {
        return Err(AppError::BadRequest(ADDRESS_REQUIRED.to_string()));
    }

    let info = state
        .provider
        .get_address_info(&address)
        .await
        .map_err(|e| map_core_error("get_address_info", e))?;

    tracing::debug!(%address, balance = info.balance, "address lookup");
    Ok(Json(info))
}

/// `GET /v1/address/` with the path segment left out.
pub(super) async fn missing_address() -> AppError {
    AppError::BadRequest(ADDRESS_REQUIRED.to_string())
}

pub(super) async fn issue_new_address(
    State(state): State<SharedState>,
) -> Result<Json<NewAddressResponse>, AppError> {
    let address = state
        .provider
        .issue_new_address()
        .await
        .map_err(|e| map_core_error("issue_new_address", e))?;

    tracing::info!(%address, "issued new address");
    Ok(Json(NewAddressResponse { address }))
}
