use color_eyre::eyre::Result;
use postbox_adapters::{config::PostboxSettings, credentials::EnvCredentials};
use postbox_core::CredentialSource;
use postbox_service::{PostboxService, configure_use_case, init_tracing};

/// Run postbox as a standalone HTTP server
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing(std::io::stdout)?;

    // Load configuration
    let settings = PostboxSettings::load()?;

    // The key is read again on every request; this only warns early.
    let api_key_env_var = &settings.email_client.api_key_env_var;
    if EnvCredentials::new(api_key_env_var.as_str()).api_key().is_none() {
        tracing::warn!("{api_key_env_var} is not set; send requests will fail until it is");
    }

    let use_case = configure_use_case(&settings)?;
    let allowed_origins = Some(settings.application.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!(sender = %settings.email_client.sender, "Starting postbox...");

    PostboxService::new(use_case, &settings.application.route)
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}
