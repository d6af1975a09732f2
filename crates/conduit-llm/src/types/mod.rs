//! Caller-facing request and result types
//!
//! These are provider-agnostic; each adapter maps them onto its own wire
//! format.

pub mod message;
pub mod request;
pub mod response;

pub use message::{Message, Role};
pub use request::{InferenceRequest, SamplingParams};
pub use response::{InferenceResult, TextStream};
