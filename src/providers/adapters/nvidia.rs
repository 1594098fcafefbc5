//! Nvidia NIM Provider Adapter
//! Static catalog, live model enumeration, and client construction for the
//! NVIDIA-hosted OpenAI-compatible API

use std::collections::HashSet;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tracing::debug;

use super::traits::{ModelRequest, ProviderAdapter};
use crate::providers::catalog::{
    descriptor_for_remote, known_model_prefix, ModelDescriptor, ModelsResponse,
};
use crate::providers::client::{ChatClient, ChatModel};
use crate::providers::constants::{
    get_capabilities, ProviderCapabilities, ProviderConfig, NVIDIA_CONFIG,
};
use crate::providers::credentials::{resolve_credentials, CredentialSources};
use crate::providers::error::ProviderError;

pub const PROVIDER_NAME: &str = "NVIDIA";

/// Hand-curated fallback catalog: chat, cost-optimized, and reasoning
/// variants with conservative limits, current as of the last manual update.
const STATIC_MODEL_TABLE: &[(&str, &str, u32, u32)] = &[
    ("gpt-4o", "GPT-4o (128k context)", 128_000, 16_384),
    ("gpt-4o-mini", "GPT-4o Mini (128k context)", 128_000, 16_384),
    ("gpt-4-turbo", "GPT-4 Turbo (128k context)", 128_000, 4_096),
    ("gpt-3.5-turbo", "GPT-3.5 Turbo (16k context)", 16_385, 4_096),
    ("o1", "o1 (128k context)", 128_000, 32_000),
    ("o1-mini", "o1-mini (128k context)", 128_000, 65_536),
    ("o3-mini", "o3-mini (128k context)", 128_000, 100_000),
];

static STATIC_MODELS: Lazy<Vec<ModelDescriptor>> = Lazy::new(|| {
    STATIC_MODEL_TABLE
        .iter()
        .map(|&(id, label, context, completion)| ModelDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            provider: PROVIDER_NAME,
            max_context_tokens: context,
            max_completion_tokens: completion,
        })
        .collect()
});

// Shared across catalog fetches for connection reuse; carries no auth state.
static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// The NVIDIA NIM adapter. Stateless; every operation reads only its own
/// inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NvidiaProvider;

impl NvidiaProvider {
    pub fn new() -> Self {
        Self
    }
}

fn parse_models_payload(body: &str) -> Result<ModelsResponse, ProviderError> {
    serde_json::from_str(body).map_err(|err| ProviderError::MalformedResponse {
        reason: err.to_string(),
    })
}

/// Keep chat models from this provider's families that the static catalog
/// does not already advertise, preserving remote order.
fn descriptors_from_response(response: ModelsResponse) -> Vec<ModelDescriptor> {
    let static_ids: HashSet<&str> = STATIC_MODELS.iter().map(|m| m.id.as_str()).collect();
    response
        .data
        .into_iter()
        .filter(|record| record.object == "model")
        .filter(|record| known_model_prefix(&record.id))
        .filter(|record| !static_ids.contains(record.id.as_str()))
        .map(|record| descriptor_for_remote(PROVIDER_NAME, &record.id, record.context_length))
        .collect()
}

#[async_trait]
impl ProviderAdapter for NvidiaProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn api_key_link(&self) -> &'static str {
        NVIDIA_CONFIG.api_key_link
    }

    fn config(&self) -> &'static ProviderConfig {
        &NVIDIA_CONFIG
    }

    fn capabilities(&self) -> ProviderCapabilities {
        get_capabilities(PROVIDER_NAME).unwrap_or_default()
    }

    fn static_models(&self) -> &[ModelDescriptor] {
        STATIC_MODELS.as_slice()
    }

    async fn dynamic_models(
        &self,
        sources: &CredentialSources,
    ) -> Result<Vec<ModelDescriptor>, ProviderError> {
        let config = self.config();
        let credentials = resolve_credentials(PROVIDER_NAME, config, sources);
        let api_key = credentials.api_key.ok_or(ProviderError::MissingApiKey {
            provider: PROVIDER_NAME,
        })?;
        let base_url = credentials
            .base_url
            .unwrap_or_else(|| config.base_url.to_string());
        let url = format!("{}/models", base_url.trim_end_matches('/'));

        debug!(%url, "listing NVIDIA models");
        let body = HTTP
            .get(&url)
            .bearer_auth(&api_key)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response = parse_models_payload(&body)?;
        let models = descriptors_from_response(response);
        debug!(count = models.len(), "dynamic models after filtering");
        Ok(models)
    }

    fn model_instance(&self, request: &ModelRequest) -> Result<ChatModel, ProviderError> {
        let config = self.config();
        let credentials = resolve_credentials(PROVIDER_NAME, config, &request.sources);
        let api_key = credentials.api_key.ok_or(ProviderError::MissingApiKey {
            provider: PROVIDER_NAME,
        })?;

        let mut builder = ChatClient::builder(PROVIDER_NAME, config.base_url).api_key(api_key);
        if let Some(base_url) = credentials.base_url {
            builder = builder.base_url(base_url);
        }
        Ok(builder.build()?.completion_model(request.model.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;
    use crate::providers::credentials::ProviderSettings;

    fn keyed_sources() -> CredentialSources {
        let mut sources = CredentialSources::default();
        sources
            .api_keys
            .insert(PROVIDER_NAME.to_string(), "nvapi-test".to_string());
        sources
    }

    #[test]
    fn static_catalog_has_seven_well_formed_entries() {
        let provider = NvidiaProvider::new();
        let models = provider.static_models();
        assert_eq!(models.len(), 7);

        let ids: HashSet<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), models.len(), "identifiers must be unique");

        for model in models {
            assert!(model.max_context_tokens > 0);
            assert!(model.max_completion_tokens > 0);
            assert_eq!(model.provider, PROVIDER_NAME);
        }
    }

    #[test]
    fn response_filtering_applies_all_three_rules() {
        let payload = json!({
            "data": [
                {"id": "gpt-4o", "object": "model"},
                {"id": "gpt-4o-2025", "object": "model"},
                {"id": "text-embedding-3-small", "object": "model"},
                {"id": "gpt-4o-audio", "object": "deployment"},
                {"id": "o1-preview-v2", "object": "model", "context_length": 200000},
                {"id": "chatgpt-4o-latest", "object": "model"},
                {"id": "llama-3-70b", "object": "model"}
            ]
        });
        let response = parse_models_payload(&payload.to_string()).unwrap();
        let models = descriptors_from_response(response);

        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["gpt-4o-2025", "o1-preview-v2", "chatgpt-4o-latest"]);
    }

    #[test]
    fn transformed_descriptors_carry_heuristic_limits() {
        let payload = json!({
            "data": [
                {"id": "gpt-4o-2025", "object": "model"},
                {"id": "o1-preview-v2", "object": "model", "context_length": 200000}
            ]
        });
        let response = parse_models_payload(&payload.to_string()).unwrap();
        let models = descriptors_from_response(response);

        assert_eq!(models[0].max_context_tokens, 128_000);
        assert_eq!(models[0].max_completion_tokens, 4_096);
        assert_eq!(models[0].label, "gpt-4o-2025 (128k context)");

        assert_eq!(models[1].max_context_tokens, 128_000);
        assert_eq!(models[1].max_completion_tokens, 32_000);
    }

    #[test]
    fn missing_data_field_is_a_malformed_response() {
        let err = parse_models_payload(r#"{"object": "list"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse { .. }));
    }

    #[test]
    fn record_without_id_is_a_malformed_response() {
        let err = parse_models_payload(r#"{"data": [{"object": "model"}]}"#).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn dynamic_models_without_key_fails_before_any_network_call() {
        let provider = NvidiaProvider::new();
        let err = provider
            .dynamic_models(&CredentialSources::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { provider: PROVIDER_NAME }));
    }

    #[test]
    fn model_instance_without_key_fails() {
        let provider = NvidiaProvider::new();
        let request = ModelRequest {
            model: "gpt-4o".to_string(),
            sources: CredentialSources::default(),
        };
        let err = provider.model_instance(&request).unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { provider: PROVIDER_NAME }));
    }

    #[test]
    fn model_instance_binds_the_default_endpoint() {
        let provider = NvidiaProvider::new();
        let request = ModelRequest {
            model: "gpt-4o".to_string(),
            sources: keyed_sources(),
        };
        let handle = provider.model_instance(&request).unwrap();
        assert_eq!(handle.base_url(), "https://integrate.api.nvidia.com/v1");
        assert_eq!(handle.model(), "gpt-4o");
        assert_eq!(handle.provider_name(), PROVIDER_NAME);
    }

    #[test]
    fn model_instance_binds_a_resolved_base_url() {
        let provider = NvidiaProvider::new();
        let mut sources = keyed_sources();
        sources.settings = Some(ProviderSettings {
            api_key: None,
            base_url: Some("https://nim.internal/v1/".to_string()),
        });
        let request = ModelRequest {
            model: "o1-mini".to_string(),
            sources,
        };
        let handle = provider.model_instance(&request).unwrap();
        assert_eq!(handle.base_url(), "https://nim.internal/v1");
    }

    #[test]
    fn model_instance_is_deterministic_for_identical_inputs() {
        let provider = NvidiaProvider::new();
        let request = ModelRequest {
            model: "gpt-4o".to_string(),
            sources: keyed_sources(),
        };
        let first = provider.model_instance(&request).unwrap();
        let second = provider.model_instance(&request).unwrap();
        assert_eq!(first.base_url(), second.base_url());
        assert_eq!(first.model(), second.model());
        assert_eq!(first.provider_name(), second.provider_name());
    }
}
