//! Provider trait and upstream adapters

pub mod together;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{Message, SamplingParams, TextStream};

pub use together::TogetherProvider;

/// A routed call, with the model already in the provider's canonical form
#[derive(Debug, Clone, Copy)]
pub struct ChatCall<'a> {
    /// Canonical upstream model name
    pub model: &'a str,
    /// Conversation messages
    pub messages: &'a [Message],
    /// Caller-supplied sampling parameters, unset fields use provider defaults
    pub params: &'a SamplingParams,
    /// Whether to stream the response
    pub stream: bool,
}

/// What an adapter hands back to the router
pub enum ProviderResponse {
    /// Fully materialized response
    Complete {
        /// First choice's message content
        content: String,
        /// Full parsed response body
        raw: serde_json::Value,
    },
    /// Live decoded token stream
    Stream(TextStream),
}

/// Trait implemented by each upstream chat-completion backend
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Send one chat completion request
    ///
    /// Streaming calls return as soon as the upstream accepts the request;
    /// later failures surface through the returned stream.
    async fn chat(&self, call: ChatCall<'_>) -> Result<ProviderResponse, LlmError>;
}
