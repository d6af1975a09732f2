//! Programmatic configuration builder for integration tests

use conduit_config::{Config, TogetherConfig};
use secrecy::SecretString;

/// Variable name no test ever sets
pub const UNSET_KEY_ENV: &str = "CONDUIT_INTEGRATION_UNSET_KEY";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Together pointed at `base_url` with a working test key
    pub fn together(base_url: &str) -> Self {
        let mut config = Config::default();
        config.providers.together = TogetherConfig {
            api_key: Some(SecretString::from("test-key")),
            api_key_env: UNSET_KEY_ENV.to_owned(),
            base_url: base_url.parse().expect("valid URL"),
            ..TogetherConfig::default()
        };
        Self { config }
    }

    /// Replace the inline key; `None` falls back to an unset variable
    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        self.config.providers.together.api_key = key.map(SecretString::from);
        self
    }

    /// Set the decode channel capacity
    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.config.providers.together.stream_buffer = capacity;
        self
    }

    /// Finalize the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
