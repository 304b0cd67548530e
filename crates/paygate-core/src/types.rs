//! Domain types returned by the payment provider.
//!
//! Field names follow the provider's snake_case JSON so that a decoded value
//! re-encodes to the same object it was read from. All amounts are integer
//! satoshis; negative values are legal for outgoing history entries.

use serde::{Deserialize, Serialize};

/// Balance summary for a single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    pub balance: i64,
    pub total_received: i64,
    pub total_transactions: i64,
}

/// One entry of the provider's transaction history search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub address: String,
    pub txid: String,
    pub value: i64,
    /// Unix timestamp in seconds.
    pub time: i64,
}

/// Result of registering a payment with the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    pub address: String,
    pub status: String,
}
