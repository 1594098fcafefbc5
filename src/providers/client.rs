//! OpenAI-compatible chat client
//! Configured handles bound to a resolved endpoint; construction performs no
//! network I/O

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::error::ProviderError;

/// Pre-configured HTTP client for one OpenAI-compatible endpoint. The bearer
/// header is attached as a sensitive default header at construction; the raw
/// key is not retained.
#[derive(Clone, Debug)]
pub struct ChatClient {
    provider: &'static str,
    base_url: String,
    http: reqwest::Client,
}

/// Builder for [`ChatClient`]
pub struct ChatClientBuilder {
    provider: &'static str,
    default_base_url: &'static str,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl ChatClient {
    pub fn builder(provider: &'static str, default_base_url: &'static str) -> ChatClientBuilder {
        ChatClientBuilder {
            provider,
            default_base_url,
            api_key: None,
            base_url: None,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    /// Endpoint this client is bound to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// HTTP client with the bearer-auth header pre-attached.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Bind this client to a model, producing the handle the completion path
    /// consumes.
    pub fn completion_model(&self, model: impl Into<String>) -> ChatModel {
        ChatModel {
            client: self.clone(),
            model: model.into(),
        }
    }
}

impl ChatClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<ChatClient, ProviderError> {
        let api_key = self.api_key.ok_or(ProviderError::MissingApiKey {
            provider: self.provider,
        })?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.default_base_url.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            ProviderError::Configuration {
                reason: "API key contains characters not allowed in headers".to_string(),
            }
        })?;
        bearer.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| ProviderError::Configuration {
                reason: err.to_string(),
            })?;

        Ok(ChatClient {
            provider: self.provider,
            base_url,
            http,
        })
    }
}

/// Opaque, model-bound handle. Performs no I/O itself; the completion path
/// invokes it later.
#[derive(Clone, Debug)]
pub struct ChatModel {
    client: ChatClient,
    model: String,
}

impl ChatModel {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }
}
