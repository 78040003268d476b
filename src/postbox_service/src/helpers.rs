use postbox_adapters::{
    config::PostboxSettings, credentials::EnvCredentials, email::ResendEmailClientFactory,
};
use postbox_application::SendEmailUseCase;
use reqwest::Client as HttpClient;

/// The production wiring: Resend as provider, API key from the environment.
pub type ResendSendEmailUseCase = SendEmailUseCase<ResendEmailClientFactory, EnvCredentials>;

/// Wire the send email use case from settings
///
/// The HTTP client (and its connection pool) is built once here; each
/// invocation only builds a lightweight Resend client around it.
///
/// # Returns
/// The configured use case, or the error from building the HTTP client
pub fn configure_use_case(
    settings: &PostboxSettings,
) -> Result<ResendSendEmailUseCase, reqwest::Error> {
    let http_client = HttpClient::builder()
        .timeout(settings.email_client.timeout())
        .build()?;

    let factory = ResendEmailClientFactory::new(
        settings.email_client.base_url.clone(),
        settings.email_client.sender.clone(),
        http_client,
    );
    let credentials = EnvCredentials::new(settings.email_client.api_key_env_var.clone());

    Ok(SendEmailUseCase::new(factory, credentials, settings.dispatch.into()))
}
