//! Provider Adapter Traits
//! Defines the interface for all provider adapters

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::providers::catalog::ModelDescriptor;
use crate::providers::client::ChatModel;
use crate::providers::constants::{ProviderCapabilities, ProviderConfig};
use crate::providers::credentials::CredentialSources;
use crate::providers::error::ProviderError;

/// Parameters for building a model-bound client handle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRequest {
    pub model: String,
    #[serde(flatten)]
    pub sources: CredentialSources,
}

/// Provider adapter trait
/// All provider adapters must implement this trait
#[async_trait]
pub trait ProviderAdapter: Send + Sync + std::fmt::Debug {
    /// Stable provider tag. Also the key into caller-supplied key maps.
    fn provider_name(&self) -> &'static str;

    /// Where a user obtains an API key for this provider.
    fn api_key_link(&self) -> &'static str;

    /// Static configuration: env-var names and the default endpoint.
    fn config(&self) -> &'static ProviderConfig;

    /// Coarse feature flags for the provider's endpoint.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Hand-curated models available without any network access.
    fn static_models(&self) -> &[ModelDescriptor];

    /// Models visible to the account that the static catalog does not
    /// already advertise, in the order the remote returns them.
    ///
    /// Fails with [`ProviderError::MissingApiKey`] before any network call
    /// when no key resolves; transport and response-shape failures propagate
    /// to the caller unretried.
    async fn dynamic_models(
        &self,
        sources: &CredentialSources,
    ) -> Result<Vec<ModelDescriptor>, ProviderError>;

    /// Build a model-bound client handle for the resolved endpoint. Performs
    /// no network I/O.
    fn model_instance(&self, request: &ModelRequest) -> Result<ChatModel, ProviderError>;
}
