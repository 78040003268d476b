//! Function host adapter.
//!
//! Serverless function platforms invoke the handler with an event document
//! and expect `{statusCode, headers, body}` back, where `body` is a JSON
//! string. The event body usually arrives as a JSON-encoded string, possibly
//! base64 encoded, but a platform invoking the function directly may pass an
//! object instead; both are accepted.

use std::collections::BTreeMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use postbox_application::SendEmailUseCase;
use postbox_core::{
    CredentialSource, DispatchRequest, DispatchResponseBuilder, EmailClientFactory, RequestBody,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::handlers::handle_send_email;

/// Invocation event as delivered by the platform. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum FunctionBody {
    Structured(Value),
    Raw(Vec<u8>),
    Undecodable(String),
    Empty,
}

/// A [`FunctionEvent`] with its transport encoding already undone.
#[derive(Debug, Clone)]
pub struct FunctionRequest {
    method: Option<String>,
    body: FunctionBody,
}

impl From<FunctionEvent> for FunctionRequest {
    fn from(event: FunctionEvent) -> Self {
        let body = match event.body {
            None | Some(Value::Null) => FunctionBody::Empty,
            Some(Value::String(text)) if text.is_empty() => FunctionBody::Empty,
            Some(Value::String(text)) if event.is_base64_encoded => match STANDARD.decode(text) {
                Ok(bytes) if bytes.is_empty() => FunctionBody::Empty,
                Ok(bytes) => FunctionBody::Raw(bytes),
                Err(e) => FunctionBody::Undecodable(format!("Invalid base64 body: {e}")),
            },
            Some(Value::String(text)) => FunctionBody::Raw(text.into_bytes()),
            Some(other) => FunctionBody::Structured(other),
        };

        Self {
            method: event.http_method,
            body,
        }
    }
}

impl DispatchRequest for FunctionRequest {
    fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    fn body(&self) -> RequestBody<'_> {
        match &self.body {
            FunctionBody::Structured(value) => RequestBody::Structured(value),
            FunctionBody::Raw(bytes) => RequestBody::Raw(bytes),
            FunctionBody::Undecodable(reason) => RequestBody::Undecodable(reason),
            FunctionBody::Empty => RequestBody::Empty,
        }
    }
}

/// The `{statusCode, headers, body}` envelope returned to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug)]
pub struct FunctionResponseBuilder {
    status_code: u16,
    headers: BTreeMap<String, String>,
    body: String,
}

impl FunctionResponseBuilder {
    pub fn new() -> Self {
        Self {
            status_code: 200,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }
}

impl Default for FunctionResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchResponseBuilder for FunctionResponseBuilder {
    type Response = FunctionResponse;

    fn status(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    fn json_body(mut self, body: Value) -> Self {
        self.body = body.to_string();
        self.header("content-type", "application/json")
    }

    fn build(self) -> Self::Response {
        FunctionResponse {
            status_code: self.status_code,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Function host entry point: one event in, one envelope out.
#[tracing::instrument(name = "Function invocation", skip_all)]
pub async fn handle_function_event<F, C>(
    use_case: &SendEmailUseCase<F, C>,
    event: FunctionEvent,
) -> FunctionResponse
where
    F: EmailClientFactory,
    C: CredentialSource,
{
    let request = FunctionRequest::from(event);
    handle_send_email(use_case, &request, FunctionResponseBuilder::new()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{credentials::StaticCredentials, email::MockEmailClientFactory};
    use postbox_application::DispatchOptions;
    use postbox_core::ProviderError;
    use serde_json::json;

    fn use_case(
        factory: &MockEmailClientFactory,
    ) -> SendEmailUseCase<MockEmailClientFactory, StaticCredentials> {
        SendEmailUseCase::new(
            factory.clone(),
            StaticCredentials::new("re_test"),
            DispatchOptions::default(),
        )
    }

    fn event(body: Value) -> FunctionEvent {
        serde_json::from_value(json!({ "httpMethod": "POST", "body": body })).unwrap()
    }

    fn body_of(response: &FunctionResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    const VALID: &str = r#"{"to":"a@example.com","subject":"Hi","html":"<p>hi</p>"}"#;

    #[tokio::test]
    async fn string_body_is_parsed_and_sent() {
        let factory = MockEmailClientFactory::succeeding(json!({ "id": "123" }));

        let response = handle_function_event(&use_case(&factory), event(json!(VALID))).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            body_of(&response),
            json!({ "message": "Email sent successfully!", "data": { "id": "123" } })
        );
        assert_eq!(factory.send_count(), 1);
    }

    #[tokio::test]
    async fn structured_body_is_accepted() {
        let factory = MockEmailClientFactory::succeeding(json!({ "id": "123" }));
        let body = json!({ "to": ["a@example.com"], "subject": "Hi", "html": "<p>hi</p>" });

        let response = handle_function_event(&use_case(&factory), event(body)).await;

        assert_eq!(response.status_code, 200);
    }

    #[tokio::test]
    async fn base64_body_is_decoded() {
        let factory = MockEmailClientFactory::succeeding(json!({ "id": "123" }));
        let event: FunctionEvent = serde_json::from_value(json!({
            "httpMethod": "POST",
            "body": STANDARD.encode(VALID),
            "isBase64Encoded": true
        }))
        .unwrap();

        let response = handle_function_event(&use_case(&factory), event).await;

        assert_eq!(response.status_code, 200);
    }

    #[tokio::test]
    async fn invalid_base64_body_is_malformed() {
        let factory = MockEmailClientFactory::default();
        let event: FunctionEvent = serde_json::from_value(json!({
            "body": "***",
            "isBase64Encoded": true
        }))
        .unwrap();

        let response = handle_function_event(&use_case(&factory), event).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(body_of(&response)["message"], "Malformed request body.");
        assert_eq!(factory.build_count(), 0);
    }

    #[tokio::test]
    async fn empty_body_is_missing_fields_with_or_without_base64() {
        let factory = MockEmailClientFactory::default();

        for is_base64_encoded in [false, true] {
            let event: FunctionEvent = serde_json::from_value(json!({
                "httpMethod": "POST",
                "body": "",
                "isBase64Encoded": is_base64_encoded
            }))
            .unwrap();

            let response = handle_function_event(&use_case(&factory), event).await;

            assert_eq!(response.status_code, 400);
            assert_eq!(
                body_of(&response),
                json!({ "message": "Missing required email fields (to, subject, or html)." })
            );
        }
        assert_eq!(factory.build_count(), 0);
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_bad_request() {
        let factory = MockEmailClientFactory::default();

        let response = handle_function_event(&use_case(&factory), event(json!("{oops"))).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(body_of(&response)["message"], "Malformed request body.");
        assert!(body_of(&response)["error"].is_string());
        assert_eq!(factory.send_count(), 0);
    }

    #[tokio::test]
    async fn missing_body_is_missing_fields() {
        let factory = MockEmailClientFactory::default();

        let response =
            handle_function_event(&use_case(&factory), FunctionEvent::default()).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_of(&response),
            json!({ "message": "Missing required email fields (to, subject, or html)." })
        );
    }

    #[tokio::test]
    async fn event_without_method_is_not_method_checked() {
        let factory = MockEmailClientFactory::succeeding(json!({ "id": "1" }));
        let event: FunctionEvent = serde_json::from_value(json!({ "body": VALID })).unwrap();

        let response = handle_function_event(&use_case(&factory), event).await;

        assert_eq!(response.status_code, 200);
    }

    #[tokio::test]
    async fn get_is_method_not_allowed() {
        let factory = MockEmailClientFactory::default();
        let event: FunctionEvent =
            serde_json::from_value(json!({ "httpMethod": "GET", "body": VALID })).unwrap();

        let response = handle_function_event(&use_case(&factory), event).await;

        assert_eq!(response.status_code, 405);
        assert_eq!(body_of(&response), json!({ "message": "Method Not Allowed" }));
    }

    #[tokio::test]
    async fn provider_failure_is_reported() {
        let factory = MockEmailClientFactory::failing(ProviderError::Transport(
            "connection reset".to_string(),
        ));

        let response = handle_function_event(&use_case(&factory), event(json!(VALID))).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body_of(&response),
            json!({ "message": "Failed to send email.", "error": "connection reset" })
        );
    }

    #[test]
    fn envelope_serializes_in_camel_case() {
        let response = FunctionResponseBuilder::new()
            .status(201)
            .json_body(json!({ "message": "ok" }))
            .build();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 201,
                "headers": { "content-type": "application/json" },
                "body": "{\"message\":\"ok\"}"
            })
        );
    }
}
