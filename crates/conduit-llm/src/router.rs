//! Inference dispatch
//!
//! Classifies each request's model, normalizes it for the owning provider,
//! and wraps the provider's answer in an [`InferenceResult`].

use std::sync::Arc;

use conduit_config::Config;

use crate::error::LlmError;
use crate::provider::{ChatCall, Provider, ProviderResponse, TogetherProvider};
use crate::routing::ProviderKind;
use crate::types::{InferenceRequest, InferenceResult};

/// Routes inference calls to wired providers
///
/// Holds no per-request state; share one instance across concurrent calls.
#[derive(Clone, Default)]
pub struct InferenceRouter {
    providers: Vec<(ProviderKind, Arc<dyn Provider>)>,
}

impl InferenceRouter {
    /// Router with every provider wired from configuration
    pub fn new(config: &Config) -> Self {
        Self::default().with_provider(
            ProviderKind::Together,
            Arc::new(TogetherProvider::new(&config.providers.together)),
        )
    }

    /// Wire (or replace) the backend serving `kind`
    #[must_use]
    pub fn with_provider(mut self, kind: ProviderKind, provider: Arc<dyn Provider>) -> Self {
        self.providers.retain(|(existing, _)| *existing != kind);
        self.providers.push((kind, provider));
        self
    }

    fn provider(&self, kind: ProviderKind) -> Option<&Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|(existing, _)| *existing == kind)
            .map(|(_, provider)| provider)
    }

    /// Route and run one inference call
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidRequest` for an empty conversation,
    /// `LlmError::RoutingNotImplemented` when no wired provider serves the
    /// model, and any error the provider raises before responding.
    pub async fn run_inference(&self, request: InferenceRequest) -> Result<InferenceResult, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::InvalidRequest("messages must not be empty".to_owned()));
        }

        let routed = ProviderKind::classify(&request.model)
            .and_then(|kind| self.provider(kind).map(|provider| (kind, provider)));

        let Some((kind, provider)) = routed else {
            tracing::warn!(model = %request.model, "no provider matches model");
            return Err(LlmError::RoutingNotImplemented { model: request.model });
        };

        let normalized = kind.normalize(&request.model);
        tracing::info!(
            provider = %provider.name(),
            model = %request.model,
            normalized = %normalized,
            "routing inference request"
        );

        let call = ChatCall {
            model: &normalized,
            messages: &request.messages,
            params: &request.params,
            stream: request.stream,
        };

        match provider.chat(call).await? {
            ProviderResponse::Stream(stream) => Ok(InferenceResult::streaming(stream)),
            ProviderResponse::Complete { content, raw } => Ok(InferenceResult::complete(content, raw)),
        }
    }
}
