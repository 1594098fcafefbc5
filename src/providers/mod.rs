//! Providers module
//! Centralized provider management for AI models

pub mod adapters;
pub mod catalog;
pub mod client;
pub mod constants;
pub mod credentials;
pub mod error;

pub use adapters::{
    get_provider_adapter, is_provider_supported, supported_providers, ModelRequest,
    NvidiaProvider, ProviderAdapter,
};
pub use catalog::ModelDescriptor;
pub use client::{ChatClient, ChatModel};
pub use constants::{
    get_base_url, get_capabilities, get_default_model, get_provider_config,
    ProviderCapabilities, ProviderConfig,
};
pub use credentials::{
    resolve_credentials, CredentialSources, ProviderSettings, ResolvedCredentials,
};
pub use error::ProviderError;

/// All supported provider names
pub const SUPPORTED_PROVIDERS: &[&str] = &["NVIDIA"];
