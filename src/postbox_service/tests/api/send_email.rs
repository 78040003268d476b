use postbox_adapters::credentials::StaticCredentials;
use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, body_partial_json, header, method, path},
};

use crate::helpers::{TEST_API_KEY, TestApp, valid_email};

#[tokio::test]
async fn send_email_returns_200_with_provider_payload() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(body_partial_json(json!({
            "from": "test@email.com",
            "to": "a@example.com",
            "subject": "Hi",
            "html": "<p>hi</p>"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "123" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_email(&valid_email()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Email sent successfully!", "data": { "id": "123" } })
    );
}

#[tokio::test]
async fn send_email_returns_500_when_provider_fails() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "statusCode": 429,
            "name": "rate_limit_exceeded",
            "message": "rate limited"
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_email(&valid_email()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Failed to send email.", "error": "rate limited" })
    );
}

#[tokio::test]
async fn send_email_returns_400_for_missing_fields() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = [
        (json!({ "subject": "Hi", "html": "<p>hi</p>" }), "missing to"),
        (json!({ "to": "a@example.com", "html": "<p>hi</p>" }), "missing subject"),
        (json!({ "to": "a@example.com", "subject": "Hi" }), "missing html"),
        (json!({ "to": "", "subject": "", "html": "" }), "all empty"),
        (json!({}), "empty object"),
    ];

    for (body, description) in test_cases {
        let response = app.post_send_email(&body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 when the payload was {description}."
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["message"],
            "Missing required email fields (to, subject, or html)."
        );
    }
}

#[tokio::test]
async fn send_email_returns_400_for_malformed_json() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_raw("{\"to\": ").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Malformed request body.");
}

#[tokio::test]
async fn non_post_methods_return_405() {
    let app = TestApp::spawn().await;

    for method in [reqwest::Method::GET, reqwest::Method::PUT, reqwest::Method::DELETE] {
        let response = app
            .http_client
            .request(method.clone(), format!("{}/api/send-email", app.address))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status().as_u16(), 405, "{method} was not rejected");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "Method Not Allowed" }));
    }
}

#[tokio::test]
async fn missing_api_key_returns_500_without_calling_provider() {
    let app = TestApp::spawn_with(StaticCredentials::missing()).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_email(&valid_email()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Server configuration error: Missing API key." })
    );
}

#[tokio::test]
async fn identical_requests_are_each_sent() {
    let app = TestApp::spawn().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "123" })))
        .expect(2)
        .mount(&app.email_server)
        .await;

    for _ in 0..2 {
        let response = app.post_send_email(&valid_email()).await;
        assert_eq!(response.status().as_u16(), 200);
    }
}

#[tokio::test]
async fn recipient_list_is_forwarded() {
    let app = TestApp::spawn().await;

    Mock::given(body_partial_json(json!({
        "to": ["a@example.com", "b@example.com"]
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "456" })))
    .expect(1)
    .mount(&app.email_server)
    .await;

    let response = app
        .post_send_email(&json!({
            "to": ["a@example.com", "b@example.com"],
            "subject": "Hi",
            "html": "<p>hi</p>"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}
