use postbox_core::{
    CredentialSource, DispatchRequest, EmailClient, EmailClientFactory, EmailRequest,
    EmailRequestError, HandlerResponse, ProviderError,
};
use serde_json::Value;

pub const SUCCESS_MESSAGE: &str = "Email sent successfully!";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to send email.";
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed request body.";

/// Controls how much of the provider exchange is echoed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Include the provider's success payload as `data`.
    pub include_provider_payload: bool,
    /// Include the provider's failure description as `error`.
    pub include_error_detail: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            include_provider_payload: true,
            include_error_detail: true,
        }
    }
}

/// Every way a dispatch can end short of a delivered email
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Server configuration error: Missing API key.")]
    MissingApiKey,
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Missing required email fields (to, subject, or html).")]
    MissingFields,
    #[error("Failed to send email: {0}")]
    Provider(#[from] ProviderError),
}

impl From<EmailRequestError> for DispatchError {
    fn from(error: EmailRequestError) -> Self {
        match error {
            EmailRequestError::Malformed(reason) => DispatchError::MalformedBody(reason),
            EmailRequestError::MissingFields => DispatchError::MissingFields,
        }
    }
}

impl DispatchError {
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::MethodNotAllowed => 405,
            DispatchError::MalformedBody(_) | DispatchError::MissingFields => 400,
            DispatchError::MissingApiKey | DispatchError::Provider(_) => 500,
        }
    }

    pub fn into_response(self, options: &DispatchOptions) -> HandlerResponse {
        let status = self.status_code();
        match self {
            DispatchError::MalformedBody(reason) => {
                let response = HandlerResponse::new(status, MALFORMED_BODY_MESSAGE);
                if options.include_error_detail {
                    response.with_error(reason)
                } else {
                    response
                }
            }
            DispatchError::Provider(error) => {
                let response = HandlerResponse::new(status, PROVIDER_FAILURE_MESSAGE);
                if options.include_error_detail {
                    response.with_error(error.to_string())
                } else {
                    response
                }
            }
            other => HandlerResponse::new(status, other.to_string()),
        }
    }
}

/// Send email use case - validates one request and forwards it to the provider
#[derive(Debug, Clone)]
pub struct SendEmailUseCase<F, C>
where
    F: EmailClientFactory,
    C: CredentialSource,
{
    factory: F,
    credentials: C,
    options: DispatchOptions,
}

impl<F, C> SendEmailUseCase<F, C>
where
    F: EmailClientFactory,
    C: CredentialSource,
{
    pub fn new(factory: F, credentials: C, options: DispatchOptions) -> Self {
        Self {
            factory,
            credentials,
            options,
        }
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    /// Execute the send email use case
    ///
    /// Checks the method, the credential, then the body, and only then builds
    /// a client and performs exactly one provider call.
    ///
    /// # Returns
    /// The provider's success payload, or the first check that failed
    #[tracing::instrument(name = "SendEmailUseCase::execute", skip_all)]
    pub async fn execute<R>(&self, request: &R) -> Result<Value, DispatchError>
    where
        R: DispatchRequest + Sync + ?Sized,
    {
        if let Some(method) = request.method() {
            if !method.eq_ignore_ascii_case("POST") {
                tracing::debug!(method, "Rejecting non-POST request");
                return Err(DispatchError::MethodNotAllowed);
            }
        }

        let Some(api_key) = self.credentials.api_key() else {
            tracing::error!("Email provider API key is not configured");
            return Err(DispatchError::MissingApiKey);
        };

        let email = EmailRequest::from_body(request.body())?;

        let client = self.factory.build(api_key);
        tracing::info!(recipients = email.to().len(), "Dispatching email");

        let payload = client.send_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Error sending email via provider");
            DispatchError::from(e)
        })?;

        tracing::info!("Email accepted by provider");
        Ok(payload)
    }

    /// Run the use case and translate its outcome into a response.
    pub async fn respond<R>(&self, request: &R) -> HandlerResponse
    where
        R: DispatchRequest + Sync + ?Sized,
    {
        match self.execute(request).await {
            Ok(payload) => {
                let response = HandlerResponse::new(200, SUCCESS_MESSAGE);
                if self.options.include_provider_payload {
                    response.with_data(payload)
                } else {
                    response
                }
            }
            Err(error) => error.into_response(&self.options),
        }
    }
}
