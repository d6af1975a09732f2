use std::fmt;
use std::pin::Pin;

use futures_util::Stream;

use crate::error::LlmError;

/// Live sequence of decoded text chunks
///
/// Ends normally when the upstream finishes, or with a single
/// `LlmError::Stream` item when the transport fails mid-stream.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// Uniform result of a routed inference call
///
/// Exactly one shape is populated: a materialized `content` with its `raw`
/// payload, or an empty `content` with a live `stream`.
pub struct InferenceResult {
    /// Complete response text, empty when streaming
    pub content: String,
    /// Decoded token stream
    pub stream: Option<TextStream>,
    /// Provider's parsed response body
    pub raw: Option<serde_json::Value>,
}

impl InferenceResult {
    pub const fn complete(content: String, raw: serde_json::Value) -> Self {
        Self {
            content,
            stream: None,
            raw: Some(raw),
        }
    }

    pub const fn streaming(stream: TextStream) -> Self {
        Self {
            content: String::new(),
            stream: Some(stream),
            raw: None,
        }
    }

    pub const fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }
}

impl fmt::Debug for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceResult")
            .field("content", &self.content)
            .field("stream", &self.stream.as_ref().map(|_| "TextStream"))
            .field("raw", &self.raw)
            .finish()
    }
}
