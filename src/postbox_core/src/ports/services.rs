use async_trait::async_trait;
use secrecy::Secret;
use serde_json::Value;

use crate::domain::email_request::EmailRequest;

/// Why a provider call did not produce a success payload.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never got a response.
    #[error("{0}")]
    Transport(String),
    /// The client is misconfigured (bad base URL and the like).
    #[error("Email client misconfigured: {0}")]
    Configuration(String),
}

/// Outcome of a single send: the provider's success payload or the reason it
/// failed.
pub type EmailSendResult = Result<Value, ProviderError>;

/// Port trait for the transactional email provider
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(&self, request: &EmailRequest) -> EmailSendResult;
}

/// Builds an [`EmailClient`] from the credential read for the current
/// invocation.
pub trait EmailClientFactory: Send + Sync {
    type Client: EmailClient + 'static;

    fn build(&self, api_key: Secret<String>) -> Self::Client;
}

/// Source of the provider API key.
///
/// Returns `None` when the key is not configured; an empty key counts as
/// not configured.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<Secret<String>>;
}
