//! Host-agnostic request/response traits for the dispatch handler.
//!
//! The same validate, dispatch and translate logic serves every hosting
//! target. Each host implements these traits on a thin wrapper around its own
//! request and response types, and the handler is written once against them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  postbox_core: DispatchRequest traits    │
//! └──────────────┬───────────────────────────┘
//!                │
//!       ┌────────┴─────────┐
//!       ▼                  ▼
//! ┌───────────────┐  ┌──────────────────────┐
//! │ AxumRequest   │  │ FunctionRequest      │
//! │ (server host) │  │ (function event)     │
//! └───────┬───────┘  └──────────┬───────────┘
//!         └──────────┬──────────┘
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │  handle_send_email: validate -> send ->  │
//! │  HandlerResponse -> host envelope        │
//! └──────────────────────────────────────────┘
//! ```

/// Request body as delivered by the host.
#[derive(Debug, Clone, Copy)]
pub enum RequestBody<'a> {
    /// The host already decoded the body into JSON.
    Structured(&'a serde_json::Value),
    /// Undecoded body bytes that should hold a JSON document.
    Raw(&'a [u8]),
    /// The host failed to read or decode the transport encoding.
    Undecodable(&'a str),
    /// No body was sent.
    Empty,
}

/// Trait for inbound requests the dispatch handler can process.
///
/// # Example
///
/// ```ignore
/// struct CliRequest {
///     payload: serde_json::Value,
/// }
///
/// impl DispatchRequest for CliRequest {
///     fn method(&self) -> Option<&str> {
///         None
///     }
///
///     fn body(&self) -> RequestBody<'_> {
///         RequestBody::Structured(&self.payload)
///     }
/// }
/// ```
pub trait DispatchRequest {
    /// The HTTP method, or `None` when the host does not multiplex verbs
    /// onto the endpoint.
    fn method(&self) -> Option<&str>;

    /// The request body.
    fn body(&self) -> RequestBody<'_>;
}

/// Trait for building the host's response envelope.
///
/// This follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(200)
///     .header("cache-control", "no-store")
///     .json_body(json!({"message": "Email sent successfully!"}))
///     .build()
/// ```
pub trait DispatchResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body along with its `content-type` header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}
