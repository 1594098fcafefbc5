//! Credential resolution
//! Precedence-ordered lookup of API key and base URL across explicit,
//! persisted, and server-environment sources

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::constants::ProviderConfig;

/// Persisted per-provider settings supplied by the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// The credential sources consulted for one request, in precedence order:
/// explicit caller-supplied keys, persisted settings, server environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSources {
    /// Caller-supplied API keys, keyed by provider name.
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
    /// Persisted settings for the provider being called.
    #[serde(default, rename = "providerSettings")]
    pub settings: Option<ProviderSettings>,
    /// Server-side environment variables.
    #[serde(default)]
    pub server_env: HashMap<String, String>,
}

/// Outcome of one resolution pass. Recomputed per request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Resolve the API key and base URL for `provider` in a single pass.
///
/// Key precedence: explicit map, then stored setting, then the environment
/// variable named by the provider config. URL precedence: stored setting,
/// then environment. Empty strings count as absent at every level.
pub fn resolve_credentials(
    provider: &str,
    config: &ProviderConfig,
    sources: &CredentialSources,
) -> ResolvedCredentials {
    let settings = sources.settings.as_ref();
    let api_key = non_empty(sources.api_keys.get(provider))
        .or_else(|| non_empty(settings.and_then(|s| s.api_key.as_ref())))
        .or_else(|| non_empty(sources.server_env.get(config.api_token_key)));
    let base_url = non_empty(settings.and_then(|s| s.base_url.as_ref()))
        .or_else(|| non_empty(sources.server_env.get(config.base_url_key)));
    ResolvedCredentials { api_key, base_url }
}
