//! Provider routing for LLM inference calls
//!
//! Classifies a requested model identifier, normalizes it into the upstream
//! provider's canonical form, and forwards the call, returning either the
//! complete response or a live stream of decoded text chunks.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod router;
pub mod routing;
pub mod sse;
pub mod types;

pub use error::LlmError;
pub use provider::{ChatCall, Provider, ProviderResponse};
pub use router::InferenceRouter;
pub use routing::{ProviderKind, is_together_model, normalize_together_model_name};
pub use types::{InferenceRequest, InferenceResult, Message, Role, SamplingParams, TextStream};
