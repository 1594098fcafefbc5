//! Provider Adapter Factory
//! Creates the appropriate adapter based on provider name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::nvidia::{NvidiaProvider, PROVIDER_NAME as NVIDIA};
use super::traits::ProviderAdapter;
use crate::providers::error::ProviderError;

// Cache for adapter instances
static ADAPTER_CACHE: Lazy<HashMap<&'static str, Arc<dyn ProviderAdapter>>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Arc<dyn ProviderAdapter>> = HashMap::new();
    map.insert(NVIDIA, Arc::new(NvidiaProvider::new()));
    map
});

/// Get provider adapter instance
/// Returns the cached adapter registered under `provider`; unknown names are
/// an error rather than a silent fallback.
pub fn get_provider_adapter(provider: &str) -> Result<Arc<dyn ProviderAdapter>, ProviderError> {
    ADAPTER_CACHE
        .get(provider)
        .cloned()
        .ok_or_else(|| ProviderError::UnknownProvider(provider.to_string()))
}

/// Check if provider is supported
pub fn is_provider_supported(provider: &str) -> bool {
    ADAPTER_CACHE.contains_key(provider)
}

/// List all supported providers
pub fn supported_providers() -> Vec<&'static str> {
    ADAPTER_CACHE.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nvidia_adapter_is_registered() {
        let adapter = get_provider_adapter("NVIDIA").unwrap();
        assert_eq!(adapter.provider_name(), "NVIDIA");
        assert!(is_provider_supported("NVIDIA"));
        assert!(supported_providers().contains(&"NVIDIA"));
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let err = get_provider_adapter("openai").unwrap_err();
        assert!(matches!(err, ProviderError::UnknownProvider(name) if name == "openai"));
        assert!(!is_provider_supported("openai"));
    }
}
