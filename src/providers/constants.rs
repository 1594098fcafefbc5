//! Provider configuration constants
//! Centralized configuration for all AI providers

/// Static configuration for one provider: the well-known environment-variable
/// names consulted during credential resolution, the documented default
/// endpoint, and user-facing metadata.
#[derive(Debug, Clone, Copy)]
pub struct ProviderConfig {
    /// Environment variable holding the API token.
    pub api_token_key: &'static str,
    /// Environment variable overriding the base URL.
    pub base_url_key: &'static str,
    /// Documented default endpoint, used when no source resolves a URL.
    pub base_url: &'static str,
    /// Model selected when the caller does not name one.
    pub default_model: &'static str,
    /// Where a user obtains an API key for this provider.
    pub api_key_link: &'static str,
}

pub static NVIDIA_CONFIG: ProviderConfig = ProviderConfig {
    api_token_key: "NVIDIA_API_KEY",
    base_url_key: "NVIDIA_API_BASE_URL",
    base_url: "https://integrate.api.nvidia.com/v1",
    default_model: "gpt-4o",
    api_key_link: "https://build.nvidia.com/explore/discover",
};

/// Provider configurations, keyed by provider name.
pub static PROVIDER_CONFIGS: &[(&str, &ProviderConfig)] = &[("NVIDIA", &NVIDIA_CONFIG)];

/// Provider capabilities
pub static PROVIDER_CAPABILITIES: &[(&str, ProviderCapabilities)] = &[(
    "NVIDIA",
    ProviderCapabilities {
        supports_streaming: true,
        supports_tool_calls: true,
        supports_json_schema: true,
        supports_thinking: true,
        supports_vision: true,
    },
)];

/// Coarse feature flags advertised for a provider's endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderCapabilities {
    pub supports_streaming: bool,
    pub supports_tool_calls: bool,
    pub supports_json_schema: bool,
    pub supports_thinking: bool,
    pub supports_vision: bool,
}

/// Get configuration for a provider
pub fn get_provider_config(provider: &str) -> Option<&'static ProviderConfig> {
    PROVIDER_CONFIGS
        .iter()
        .find(|(name, _)| *name == provider)
        .map(|(_, config)| *config)
}

/// Get base URL for a provider
pub fn get_base_url(provider: &str) -> Option<&'static str> {
    get_provider_config(provider).map(|config| config.base_url)
}

/// Get default model for a provider
pub fn get_default_model(provider: &str) -> Option<&'static str> {
    get_provider_config(provider).map(|config| config.default_model)
}

/// Get capabilities for a provider
pub fn get_capabilities(provider: &str) -> Option<ProviderCapabilities> {
    PROVIDER_CAPABILITIES
        .iter()
        .find(|(name, _)| *name == provider)
        .map(|(_, caps)| *caps)
}
