use serde::{Deserialize, Serialize};

use super::message::Message;

/// Sampling parameters; unset fields fall back to provider defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Stop sequences, in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// Inference call as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Model identifier in any accepted shape (`together/...`, alias, full path)
    #[serde(rename = "name")]
    pub model: String,
    /// Conversation messages in order; must not be empty
    pub messages: Vec<Message>,
    /// Generation parameters
    #[serde(flatten)]
    pub params: SamplingParams,
    /// Whether to return a live token stream
    #[serde(default)]
    pub stream: bool,
}

impl InferenceRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            params: SamplingParams::default(),
            stream: false,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub const fn streaming(mut self) -> Self {
        self.stream = true;
        self
    }
}
