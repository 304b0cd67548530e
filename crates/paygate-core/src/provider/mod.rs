//! Payment provider abstraction layer.
//!
//! Defines the [`PaymentProvider`] trait and the Blockonomics REST
//! implementation ([`BlockonomicsClient`]).

mod blockonomics;

pub use blockonomics::BlockonomicsClient;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{AddressInfo, CreatePaymentResponse, TransactionInfo};

/// The provider operations the gateway forwards to.
///
/// Every call is independent: implementations hold no per-session state and
/// issue exactly one outbound request per call.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Register a payment of `amount` satoshis whose status updates the
    /// provider will deliver to `callback_url`.
    async fn create_payment_address(
        &self,
        amount: i64,
        callback_url: &str,
    ) -> Result<CreatePaymentResponse, CoreError>;

    /// Current balance summary for `address`.
    async fn get_address_info(&self, address: &str) -> Result<AddressInfo, CoreError>;

    /// Most recent history entry matching `txid`.
    ///
    /// Fails with [`CoreError::NotFound`] when the provider has no match.
    async fn get_transaction_info(&self, txid: &str) -> Result<TransactionInfo, CoreError>;

    /// Ask the provider to derive a fresh receiving address.
    async fn issue_new_address(&self) -> Result<String, CoreError>;
}
