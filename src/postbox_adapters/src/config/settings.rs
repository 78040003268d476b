use std::time::Duration;

use config::{
    Config, ConfigError, Environment, File,
    builder::{ConfigBuilder, DefaultState},
};
use postbox_application::DispatchOptions;
use serde::Deserialize;

use crate::config::constants::{
    SEND_EMAIL_ROUTE,
    env::{APP_ENVIRONMENT_ENV_VAR, RESEND_API_KEY_ENV_VAR, SETTINGS_ENV_PREFIX},
    prod,
};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),
}

/// Settings for the whole service.
///
/// Layered, later sources winning: built-in defaults, `config/base.json`,
/// `config/{APP_ENVIRONMENT}.json`, then `POSTBOX__SECTION__KEY` environment
/// variables. The provider API key is deliberately not a setting; it is read
/// from the variable named by `email_client.api_key_env_var` on every
/// invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct PostboxSettings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub dispatch: DispatchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub route: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub timeout_in_millis: u64,
    pub api_key_env_var: String,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DispatchSettings {
    pub include_provider_payload: bool,
    pub include_error_detail: bool,
}

impl From<DispatchSettings> for DispatchOptions {
    fn from(settings: DispatchSettings) -> Self {
        DispatchOptions {
            include_provider_payload: settings.include_provider_payload,
            include_error_detail: settings.include_error_detail,
        }
    }
}

/// Browser origins allowed to call the send endpoint. Empty disables CORS.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PostboxSettings {
    /// Load settings from `.env`, the config directory and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var(APP_ENVIRONMENT_ENV_VAR).unwrap_or_else(|_| "local".to_string());

        let settings = Self::with_defaults()?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Settings built from the defaults alone.
    pub fn defaults() -> Result<Self, SettingsError> {
        Ok(Self::with_defaults()?.build()?.try_deserialize()?)
    }

    /// `POSTBOX__SECTION__KEY` overrides; `allowed_origins` is comma-separated.
    fn environment() -> Environment {
        Environment::with_prefix(SETTINGS_ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("application.allowed_origins")
            .try_parsing(true)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.route", SEND_EMAIL_ROUTE)?
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default("email_client.sender", prod::email_client::SENDER)?
            .set_default(
                "email_client.timeout_in_millis",
                prod::email_client::TIMEOUT.as_millis() as i64,
            )?
            .set_default("email_client.api_key_env_var", RESEND_API_KEY_ENV_VAR)?
            .set_default("dispatch.include_provider_payload", true)?
            .set_default("dispatch.include_error_detail", true)
    }
}
