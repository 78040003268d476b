//! Axum adapters for the host-agnostic dispatch traits.
//!
//! This module implements `DispatchRequest` and `DispatchResponseBuilder` for
//! Axum's types using wrappers, which also keeps us clear of the orphan rule.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  postbox_core::DispatchRequest (trait)     │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest { method, buffered body }     │
//! │  impl DispatchRequest for AxumRequest { }  │
//! └────────────────────────────────────────────┘
//! ```
//!
//! Axum streams request bodies, while the handler wants to look at the whole
//! document, so the body is buffered (up to [`MAX_BODY_BYTES`]) before the
//! handler runs.

use axum::body::{Body, Bytes};
use axum::extract::Request as AxumExtractRequest;
use axum::http::{Method, Response, StatusCode};
use postbox_adapters::config::MAX_BODY_BYTES;
use postbox_core::{DispatchRequest, DispatchResponseBuilder, RequestBody};

/// An Axum request with its body buffered in memory.
#[derive(Debug)]
pub struct AxumRequest {
    method: Method,
    body: Result<Bytes, String>,
}

impl AxumRequest {
    /// Buffer the body of an incoming request.
    ///
    /// A body that cannot be read (too large, connection dropped) is kept as
    /// an error and reported by the handler as a malformed body.
    pub async fn buffer(request: AxumExtractRequest) -> Self {
        let (parts, body) = request.into_parts();
        let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| format!("Failed to read request body: {e}"));

        Self {
            method: parts.method,
            body,
        }
    }
}

impl DispatchRequest for AxumRequest {
    fn method(&self) -> Option<&str> {
        Some(self.method.as_str())
    }

    fn body(&self) -> RequestBody<'_> {
        match &self.body {
            Ok(bytes) if bytes.is_empty() => RequestBody::Empty,
            Ok(bytes) => RequestBody::Raw(bytes),
            Err(reason) => RequestBody::Undecodable(reason),
        }
    }
}

/// Response builder producing an Axum response.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
