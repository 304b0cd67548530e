use std::time::Duration;

use clap::Parser;

use paygate_core::config::DEFAULT_BASE_URL;
use paygate_core::ProviderConfig;

/// Paygate: HTTP gateway for Bitcoin payment operations backed by Blockonomics.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Blockonomics API key, sent as a bearer credential.
    #[arg(long, env = "PAYGATE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Address the HTTP server listens on.
    #[arg(long, default_value = "127.0.0.1:8080", env = "PAYGATE_SERVER_ADDRESS")]
    pub server_address: String,

    /// Provider base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "PAYGATE_PROVIDER_URL")]
    pub provider_url: String,

    /// Timeout for each outbound provider request, in seconds.
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub provider_timeout_secs: u64,

    /// Maximum outbound provider requests per second (unlimited if omitted).
    #[arg(long)]
    pub provider_rps: Option<u32>,

    /// Browser origin allowed to call the API cross-origin.
    #[arg(long)]
    pub cors_origin: Option<String>,
}

impl Cli {
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.api_key.clone())
            .with_base_url(self.provider_url.clone())
            .with_timeout(Duration::from_secs(self.provider_timeout_secs))
            .with_requests_per_second(self.provider_rps)
    }
}
