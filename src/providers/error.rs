//! Provider errors
//! Typed failures shared by catalog fetches and client construction

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No API key resolved from any credential source. Raised before any
    /// network call is made; there is no fallback credential.
    #[error("no API key configured for provider {provider}")]
    MissingApiKey { provider: &'static str },

    /// Network or HTTP failure during a live catalog fetch. Propagated
    /// unmodified; this layer does not retry.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote response body did not match the expected shape.
    #[error("malformed models response: {reason}")]
    MalformedResponse { reason: String },

    /// Credential material could not be turned into request headers.
    #[error("invalid client configuration: {reason}")]
    Configuration { reason: String },

    /// No adapter is registered under the requested name.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}
