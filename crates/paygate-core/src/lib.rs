pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::ProviderConfig;
pub use error::{CoreError, ProviderError};
pub use provider::{BlockonomicsClient, PaymentProvider};
pub use types::{AddressInfo, CreatePaymentResponse, TransactionInfo};
