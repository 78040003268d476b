use postbox_core::{
    EmailClient, EmailClientFactory, EmailRequest, EmailSendResult, ProviderError, Recipients,
};
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;

pub struct ResendEmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    api_key: Secret<String>,
}

impl ResendEmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        api_key: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl EmailClient for ResendEmailClient {
    #[tracing::instrument(name = "Sending email", skip_all)]
    async fn send_email(&self, request: &EmailRequest) -> EmailSendResult {
        let url = emails_url(&self.base_url)?;

        let request_body = SendEmailRequest {
            from: &self.sender,
            to: request.to(),
            subject: request.subject(),
            html: request.html(),
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response.text().await;

        if !status.is_success() {
            let message = match text {
                Ok(body) => rejection_message(status, &body),
                Err(e) => format!("{status}: unreadable response body ({e})"),
            };
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // The message was accepted; an odd payload must not turn into a failure.
        match text.map(|body| serde_json::from_str::<Value>(&body)) {
            Ok(Ok(payload)) => Ok(payload),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Provider accepted the email with a non-JSON body");
                Ok(Value::Null)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Provider accepted the email, body unreadable");
                Ok(Value::Null)
            }
        }
    }
}

/// `{base_url}/emails`, keeping any path prefix on the base URL.
fn emails_url(base_url: &str) -> Result<Url, ProviderError> {
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|base| base.join(EMAILS_PATH))
        .map_err(|e| ProviderError::Configuration(e.to_string()))
}

/// Resend reports failures as `{"name": .., "message": ..}`; fall back to the
/// raw body when it does not.
fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| format!("{status}: {body}"))
}

/// Builds a [`ResendEmailClient`] per invocation, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct ResendEmailClientFactory {
    http_client: Client,
    base_url: String,
    sender: String,
}

impl ResendEmailClientFactory {
    pub fn new(base_url: String, sender: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            sender,
        }
    }
}

impl EmailClientFactory for ResendEmailClientFactory {
    type Client = ResendEmailClient;

    fn build(&self, api_key: Secret<String>) -> Self::Client {
        ResendEmailClient::new(
            self.base_url.clone(),
            self.sender.clone(),
            api_key,
            self.http_client.clone(),
        )
    }
}

const EMAILS_PATH: &str = "emails";

#[derive(serde::Serialize, Debug)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a Recipients,
    subject: &'a str,
    html: &'a str,
}
