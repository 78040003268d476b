use postbox_core::CredentialSource;
use secrecy::{ExposeSecret, Secret};

/// Reads the API key from an environment variable on every call, so a key
/// rotated in the environment is picked up by the next invocation.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var_name: String,
}

impl EnvCredentials {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<Secret<String>> {
        std::env::var(&self.var_name)
            .ok()
            .filter(|key| !key.is_empty())
            .map(Secret::new)
    }
}

/// A key fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    api_key: Option<Secret<String>>,
}

impl StaticCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(Secret::new(api_key.into())),
        }
    }

    pub fn missing() -> Self {
        Self { api_key: None }
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<Secret<String>> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().is_empty())
            .cloned()
    }
}
