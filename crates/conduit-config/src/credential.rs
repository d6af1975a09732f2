use secrecy::{ExposeSecret, SecretString};

/// Location of a provider's bearer credential
///
/// Resolution happens on every call so a key exported after startup is
/// picked up, and a blank value is reported as missing rather than sent.
#[derive(Debug, Clone)]
pub struct CredentialSource {
    inline: Option<SecretString>,
    env_var: String,
}

impl CredentialSource {
    /// Read the credential from the named environment variable
    pub fn env(var: &str) -> Self {
        Self {
            inline: None,
            env_var: var.to_owned(),
        }
    }

    /// Use a fixed credential, reported under `name` when it is blank
    pub fn inline(key: SecretString, name: &str) -> Self {
        Self {
            inline: Some(key),
            env_var: name.to_owned(),
        }
    }

    /// Name used in diagnostics when the credential is missing
    pub fn name(&self) -> &str {
        &self.env_var
    }

    /// Resolve the credential, returning `None` when it is absent or blank
    pub fn resolve(&self) -> Option<SecretString> {
        let key = match &self.inline {
            Some(key) => key.clone(),
            None => SecretString::from(std::env::var(&self.env_var).ok()?),
        };

        if key.expose_secret().trim().is_empty() {
            return None;
        }

        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_source_reads_variable() {
        temp_env::with_var("CONDUIT_TEST_KEY", Some("sk-live"), || {
            let key = CredentialSource::env("CONDUIT_TEST_KEY").resolve().unwrap();
            assert_eq!(key.expose_secret(), "sk-live");
        });
    }

    #[test]
    fn unset_variable_resolves_to_none() {
        temp_env::with_var_unset("CONDUIT_TEST_KEY", || {
            assert!(CredentialSource::env("CONDUIT_TEST_KEY").resolve().is_none());
        });
    }

    #[test]
    fn whitespace_variable_resolves_to_none() {
        temp_env::with_var("CONDUIT_TEST_KEY", Some("  \t "), || {
            assert!(CredentialSource::env("CONDUIT_TEST_KEY").resolve().is_none());
        });
    }

    #[test]
    fn inline_key_ignores_environment() {
        temp_env::with_var("CONDUIT_TEST_KEY", Some("from-env"), || {
            let source = CredentialSource::inline(SecretString::from("inline"), "CONDUIT_TEST_KEY");
            assert_eq!(source.resolve().unwrap().expose_secret(), "inline");
        });
    }

    #[test]
    fn blank_inline_key_resolves_to_none() {
        let source = CredentialSource::inline(SecretString::from(""), "TOGETHER_API_KEY");
        assert!(source.resolve().is_none());
        assert_eq!(source.name(), "TOGETHER_API_KEY");
    }
}
