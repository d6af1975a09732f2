use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use crate::credential::CredentialSource;

/// Default Together AI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";

/// Environment variable holding the Together AI key
pub const DEFAULT_API_KEY_ENV: &str = "TOGETHER_API_KEY";

/// Default capacity of the channel between a stream's decode task and its consumer
pub const DEFAULT_STREAM_BUFFER: usize = 32;

/// Configuration for the Together AI upstream
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TogetherConfig {
    /// Inline API key, takes precedence over `api_key_env`
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Environment variable read at call time when no inline key is set
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Base URL; `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Number of decoded chunks buffered ahead of a slow stream consumer
    #[serde(default = "default_stream_buffer")]
    pub stream_buffer: usize,
    /// Sampling parameters applied when the caller omits them
    #[serde(default)]
    pub defaults: SamplingDefaults,
}

impl Default for TogetherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            stream_buffer: DEFAULT_STREAM_BUFFER,
            defaults: SamplingDefaults::default(),
        }
    }
}

impl TogetherConfig {
    /// Where the provider should look for its bearer credential
    pub fn credential_source(&self) -> CredentialSource {
        match &self.api_key {
            Some(key) => CredentialSource::inline(key.clone(), &self.api_key_env),
            None => CredentialSource::env(&self.api_key_env),
        }
    }
}

/// Sampling parameters used when a request leaves them unset
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingDefaults {
    /// Low temperature favoring deterministic output
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Output token ceiling
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Nucleus sampling threshold, `1.0` disables the restriction
    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
        }
    }
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_owned()
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default URL")
}

const fn default_stream_buffer() -> usize {
    DEFAULT_STREAM_BUFFER
}

const fn default_temperature() -> f64 {
    0.2
}

const fn default_max_tokens() -> u32 {
    2048
}

const fn default_top_p() -> f64 {
    1.0
}
