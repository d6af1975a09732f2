//! Together AI chat completion API wire format types
//!
//! The API is `OpenAI`-compatible. Only the fields the router reads or writes
//! are modelled; the non-streaming response is kept as raw JSON for callers
//! that need provider-specific fields.

use conduit_config::SamplingDefaults;
use serde::Serialize;
use serde_json::Value;

use crate::types::{Message, SamplingParams};

// -- Request types --

/// Chat completion request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Canonical upstream model name
    pub model: &'a str,
    /// Conversation messages
    pub messages: &'a [Message],
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Whether to stream the response
    pub stream: bool,
    /// Nucleus sampling threshold
    pub top_p: f64,
    /// Stop sequences, omitted when none were supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<&'a [String]>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Build a request body, filling unset parameters from `defaults`
    pub fn new(
        model: &'a str,
        messages: &'a [Message],
        params: &'a SamplingParams,
        stream: bool,
        defaults: &SamplingDefaults,
    ) -> Self {
        Self {
            model,
            messages,
            temperature: params.temperature.unwrap_or(defaults.temperature),
            max_tokens: params.max_tokens.unwrap_or(defaults.max_tokens),
            stream,
            top_p: params.top_p.unwrap_or(defaults.top_p),
            stop: params.stop.as_deref().filter(|stop| !stop.is_empty()),
        }
    }
}

// -- Response helpers --

/// Content of the first choice's message, or empty when absent
pub fn response_content(raw: &Value) -> String {
    raw.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Text delta of a streaming chunk's first choice
///
/// Only index 0 is read; other choices may have any shape.
pub fn delta_content(chunk: &Value) -> Option<&str> {
    chunk.pointer("/choices/0/delta/content").and_then(Value::as_str)
}
