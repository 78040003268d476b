use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use postbox_core::{EmailClient, EmailClientFactory, EmailRequest, EmailSendResult};
use secrecy::Secret;
use serde_json::{Value, json};

/// Email client that never leaves the process. Replays a fixed outcome and
/// counts how often it was asked to send.
#[derive(Debug, Clone)]
pub struct MockEmailClient {
    outcome: EmailSendResult,
    sends: Arc<AtomicUsize>,
}

impl MockEmailClient {
    pub fn new(outcome: EmailSendResult) -> Self {
        Self {
            outcome,
            sends: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn send_count(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailClient {
    fn default() -> Self {
        Self::new(Ok(json!({ "id": "mock" })))
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(&self, _request: &EmailRequest) -> EmailSendResult {
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Hands out clones of one [`MockEmailClient`] and counts the builds.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClientFactory {
    client: MockEmailClient,
    builds: Arc<AtomicUsize>,
}

impl MockEmailClientFactory {
    pub fn succeeding(payload: Value) -> Self {
        Self::with_client(MockEmailClient::new(Ok(payload)))
    }

    pub fn failing(error: postbox_core::ProviderError) -> Self {
        Self::with_client(MockEmailClient::new(Err(error)))
    }

    fn with_client(client: MockEmailClient) -> Self {
        Self {
            client,
            builds: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn send_count(&self) -> usize {
        self.client.send_count()
    }
}

impl EmailClientFactory for MockEmailClientFactory {
    type Client = MockEmailClient;

    fn build(&self, _api_key: Secret<String>) -> Self::Client {
        self.builds.fetch_add(1, Ordering::SeqCst);
        self.client.clone()
    }
}
