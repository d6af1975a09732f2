use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml_str(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if variable expansion, parsing, or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a provider setting is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        let together = &self.providers.together;

        if !matches!(together.base_url.scheme(), "http" | "https") {
            anyhow::bail!("providers.together.base_url must use http or https");
        }

        if together.api_key_env.trim().is_empty() {
            anyhow::bail!("providers.together.api_key_env must not be empty");
        }

        if together.stream_buffer == 0 {
            anyhow::bail!("providers.together.stream_buffer must be greater than 0");
        }

        let defaults = &together.defaults;

        if !(0.0..=2.0).contains(&defaults.temperature) {
            anyhow::bail!("providers.together.defaults.temperature must be between 0 and 2");
        }

        if defaults.max_tokens == 0 {
            anyhow::bail!("providers.together.defaults.max_tokens must be greater than 0");
        }

        if !(defaults.top_p > 0.0 && defaults.top_p <= 1.0) {
            anyhow::bail!("providers.together.defaults.top_p must be in (0, 1]");
        }

        Ok(())
    }
}
