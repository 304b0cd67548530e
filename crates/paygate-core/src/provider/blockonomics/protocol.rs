use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// Body of the payment-creation POST.
#[derive(Debug, serde::Serialize)]
pub(super) struct CreatePaymentRequest<'a> {
    pub(super) addr: &'a str,
    pub(super) callback_url: &'a str,
    pub(super) amount: i64,
}

#[derive(serde::Deserialize)]
pub(super) struct NewAddressResponse {
    pub(super) address: String,
}

/// Decode a provider body into `T`, naming the endpoint in the error.
pub(super) fn decode_body<T: DeserializeOwned>(what: &str, body: &str) -> Result<T, CoreError> {
    serde_json::from_str(body).map_err(|e| CoreError::Decode(format!("{what}: {e}")))
}
