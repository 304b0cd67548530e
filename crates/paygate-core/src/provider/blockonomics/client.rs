use std::num::NonZeroU32;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{header, RequestBuilder, StatusCode};
use tracing::{debug, trace};

use crate::config::ProviderConfig;
use crate::error::{CoreError, ProviderError};
use crate::types::{AddressInfo, CreatePaymentResponse, TransactionInfo};

use super::super::PaymentProvider;
use super::endpoints::Endpoints;
use super::protocol::{decode_body, CreatePaymentRequest, NewAddressResponse};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Blockonomics REST client over HTTP(S).
///
/// Holds only immutable configuration: one `reqwest::Client` (timeouts baked
/// in), the API key, and the resolved endpoint URLs. Safe to share behind an
/// `Arc` across any number of concurrent requests.
pub struct BlockonomicsClient {
    client: reqwest::Client,
    api_key: String,
    endpoints: Endpoints,
    limiter: Option<DirectRateLimiter>,
}

impl BlockonomicsClient {
    /// Build a client from `config`.
    ///
    /// Fails with [`CoreError::Config`] when the API key is blank, the timeout
    /// or rate limit is zero, or the base URL is not HTTP(S).
    pub fn new(config: ProviderConfig) -> Result<Self, CoreError> {
        if config.api_key.trim().is_empty() {
            return Err(CoreError::Config(
                "provider api key must not be empty".to_owned(),
            ));
        }
        if config.timeout.is_zero() {
            return Err(CoreError::Config(
                "provider timeout must be greater than zero".to_owned(),
            ));
        }
        let endpoints = Endpoints::from_base(&config.base_url)?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| CoreError::Config(format!("build http client: {e}")))?;

        let limiter = match config.requests_per_second {
            None => None,
            Some(limit) => {
                let limit = NonZeroU32::new(limit).ok_or_else(|| {
                    CoreError::Config("requests_per_second must be at least 1".to_owned())
                })?;
                Some(RateLimiter::direct(Quota::per_second(limit)))
            }
        };

        Ok(Self {
            client,
            api_key: config.api_key,
            endpoints,
            limiter,
        })
    }

    async fn wait_for_rate_limit(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Send `request` with the bearer credential and return the body of a
    /// `200 OK` response. Any other status becomes [`ProviderError::Status`].
    async fn execute(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<String, CoreError> {
        self.wait_for_rate_limit().await;
        debug!(provider.endpoint = endpoint, "provider request");

        let response = request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(ProviderError::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(ProviderError::Transport)?;
        debug!(provider.endpoint = endpoint, %status, body_len = body.len(), "provider response");
        trace!(provider.endpoint = endpoint, body = %body, "provider response body");

        if status != StatusCode::OK {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(body)
    }
}

fn require_non_empty(name: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} parameter is required")));
    }
    Ok(())
}

#[async_trait]
impl PaymentProvider for BlockonomicsClient {
    async fn create_payment_address(
        &self,
        amount: i64,
        callback_url: &str,
    ) -> Result<CreatePaymentResponse, CoreError> {
        if amount <= 0 {
            return Err(CoreError::Validation(format!(
                "amount must be a positive integer, got {amount}"
            )));
        }
        require_non_empty("callback_url", callback_url)?;

        // The provider contract observed in production sends the new-address
        // endpoint itself as `addr`, not a concrete address.
        let payload = CreatePaymentRequest {
            addr: self.endpoints.new_address.as_str(),
            callback_url,
            amount,
        };
        let request = self
            .client
            .post(self.endpoints.payment.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&payload);

        let body = self.execute("payment", request).await?;
        decode_body("payment", &body)
    }

    async fn get_address_info(&self, address: &str) -> Result<AddressInfo, CoreError> {
        require_non_empty("address", address)?;

        let request = self
            .client
            .get(self.endpoints.address.clone())
            .query(&[("addr", address)]);

        let body = self.execute("address", request).await?;
        decode_body("address", &body)
    }

    async fn get_transaction_info(&self, txid: &str) -> Result<TransactionInfo, CoreError> {
        require_non_empty("txid", txid)?;

        let request = self
            .client
            .get(self.endpoints.search_history.clone())
            .query(&[("txid", txid)]);

        let body = self.execute("searchhistory", request).await?;
        let history: Vec<TransactionInfo> = decode_body("searchhistory", &body)?;
        debug!(txid, matches = history.len(), "transaction history search");

        history
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::NotFound(txid.to_owned()))
    }

    async fn issue_new_address(&self) -> Result<String, CoreError> {
        let request = self.client.get(self.endpoints.new_address.clone());

        let body = self.execute("new_address", request).await?;
        let decoded: NewAddressResponse = decode_body("new_address", &body)?;
        Ok(decoded.address)
    }
}
