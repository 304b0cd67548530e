/// Failures of the outbound HTTP round trip itself.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Connection, TLS, or timeout failure before a status was received.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something other than `200 OK`.
    #[error("unexpected status code: {status}")]
    Status { status: u16, body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("invalid provider response: {0}")]
    Decode(String),

    #[error("transaction not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
