use serde_json::{Value, json};

use crate::http_abstraction::DispatchResponseBuilder;

/// The logical outcome of one invocation: a status code and a JSON message.
///
/// Hosts differ only in the envelope they wrap this in, so the response is
/// written through a [`DispatchResponseBuilder`] at the very end.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    status: u16,
    message: String,
    data: Option<Value>,
    error: Option<String>,
}

impl HandlerResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// JSON body: `{message, data?, error?}`.
    pub fn body(&self) -> Value {
        let mut body = json!({ "message": self.message });
        if let Some(data) = &self.data {
            body["data"] = data.clone();
        }
        if let Some(error) = &self.error {
            body["error"] = json!(error);
        }
        body
    }

    /// Write this response into a host-specific envelope.
    pub fn write<B: DispatchResponseBuilder>(self, builder: B) -> B::Response {
        let body = self.body();
        builder.status(self.status).json_body(body).build()
    }
}
