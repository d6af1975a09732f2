//! Together AI provider implementation

use async_trait::async_trait;
use conduit_config::{CredentialSource, SamplingDefaults, TogetherConfig};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{ChatCall, Provider, ProviderResponse};
use crate::error::LlmError;
use crate::protocol::together::{ChatCompletionRequest, response_content};
use crate::routing::ProviderKind;
use crate::sse::decode_stream;

/// Together AI chat-completions adapter
pub struct TogetherProvider {
    client: Client,
    base_url: Url,
    credential: CredentialSource,
    defaults: SamplingDefaults,
    stream_buffer: usize,
}

impl TogetherProvider {
    /// Create from provider configuration
    pub fn new(config: &TogetherConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create with a caller-supplied HTTP client (proxies, timeouts, TLS)
    pub fn with_client(client: Client, config: &TogetherConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            credential: config.credential_source(),
            defaults: config.defaults,
            stream_buffer: config.stream_buffer,
        }
    }

    /// Resolve the bearer credential, before any network activity
    fn api_key(&self) -> Result<SecretString, LlmError> {
        self.credential.resolve().ok_or_else(|| {
            tracing::error!(credential = %self.credential.name(), "provider credential missing");
            LlmError::Configuration(self.credential.name().to_owned())
        })
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl Provider for TogetherProvider {
    fn name(&self) -> &str {
        ProviderKind::Together.display_name()
    }

    async fn chat(&self, call: ChatCall<'_>) -> Result<ProviderResponse, LlmError> {
        let api_key = self.api_key()?;

        let body = ChatCompletionRequest::new(call.model, call.messages, call.params, call.stream, &self.defaults);

        tracing::debug!(
            provider = %self.name(),
            model = %call.model,
            stream = call.stream,
            messages = call.messages.len(),
            "sending chat completion"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name(), error = %e, "upstream request failed");
                LlmError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                provider = %self.name(),
                status = %status,
                "upstream returned error"
            );
            return Err(LlmError::Upstream {
                provider: self.name().to_owned(),
                status: status.as_u16(),
                body,
            });
        }

        if call.stream {
            return Ok(ProviderResponse::Stream(decode_stream(
                response.bytes_stream(),
                self.stream_buffer,
            )));
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| {
            tracing::warn!(provider = %self.name(), error = %e, "failed to parse upstream response");
            LlmError::MalformedResponse(e.to_string())
        })?;

        Ok(ProviderResponse::Complete {
            content: response_content(&raw),
            raw,
        })
    }
}
