#![allow(clippy::must_use_candidate)]

mod credential;
mod env;
mod loader;
pub mod together;

use serde::Deserialize;

pub use credential::CredentialSource;
pub use together::{SamplingDefaults, TogetherConfig};

/// Top-level Conduit configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Upstream provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Configuration for every wired upstream provider
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    /// Together AI chat-completions upstream
    #[serde(default)]
    pub together: TogetherConfig,
}
