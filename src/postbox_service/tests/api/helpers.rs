use postbox_adapters::{
    config::{
        AllowedOrigins,
        test::{APP_ADDRESS, email_client},
    },
    credentials::StaticCredentials,
    email::ResendEmailClientFactory,
};
use postbox_application::{DispatchOptions, SendEmailUseCase};
use postbox_service::PostboxService;
use serde_json::Value;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "re_test_key";
pub const ALLOWED_ORIGIN: &str = "https://app.example.com";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(StaticCredentials::new(TEST_API_KEY)).await
    }

    pub async fn spawn_with(credentials: StaticCredentials) -> Self {
        let email_server = MockServer::start().await;

        let http_client = reqwest::Client::builder()
            .timeout(email_client::TIMEOUT)
            .build()
            .unwrap();
        let factory = ResendEmailClientFactory::new(
            email_server.uri(),
            email_client::SENDER.to_string(),
            http_client,
        );
        let use_case = SendEmailUseCase::new(factory, credentials, DispatchOptions::default());

        let listener = tokio::net::TcpListener::bind(APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = PostboxService::new(use_case, "/api/send-email");
        let allowed_origins = AllowedOrigins::new(vec![ALLOWED_ORIGIN.to_string()]);
        tokio::spawn(service.run_standalone(listener, Some(allowed_origins)));

        Self {
            address,
            http_client: reqwest::Client::new(),
            email_server,
        }
    }

    pub async fn post_send_email(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/send-email", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/send-email", self.address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn valid_email() -> Value {
    serde_json::json!({
        "to": "a@example.com",
        "subject": "Hi",
        "html": "<p>hi</p>"
    })
}
