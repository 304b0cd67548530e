use std::fmt;
use std::time::Duration;

/// Public Blockonomics API host.
pub const DEFAULT_BASE_URL: &str = "https://www.blockonomics.co";

/// Upper bound on a whole outbound request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Immutable settings for [`crate::BlockonomicsClient`].
///
/// Built once at startup and moved into the client; nothing here changes
/// while the process runs.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Sent as `Authorization: Bearer <api_key>` on every outbound request.
    pub api_key: String,
    /// Scheme and host of the provider; endpoint paths are appended to it.
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Optional cap on outbound requests per second. `None` disables it.
    pub requests_per_second: Option<u32>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            requests_per_second: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_requests_per_second(mut self, limit: Option<u32>) -> Self {
        self.requests_per_second = limit;
        self
    }
}

// The API key must never reach logs through `{:?}`.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("requests_per_second", &self.requests_per_second)
            .finish()
    }
}
