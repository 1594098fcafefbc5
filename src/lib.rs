//! llm-providers
//!
//! Provider adapters for OpenAI-compatible AI model APIs. Each adapter
//! advertises a static model catalog, enumerates the provider's live catalog
//! on demand, and constructs configured client handles for the downstream
//! completion path.

pub mod providers;

pub use providers::{
    get_provider_adapter, is_provider_supported, supported_providers, ChatClient, ChatModel,
    CredentialSources, ModelDescriptor, ModelRequest, NvidiaProvider, ProviderAdapter,
    ProviderError, ProviderSettings, SUPPORTED_PROVIDERS,
};
