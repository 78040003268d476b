use serde::Serialize;
use serde_json::Value;

use crate::http_abstraction::RequestBody;

/// Recipient address(es) of an email.
///
/// On the wire this is either a single string or a list of strings, and it is
/// serialized back to the provider in the same shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Recipients {
    Single(String),
    Many(Vec<String>),
}

impl Recipients {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(address) if !address.is_empty() => Some(Self::Single(address.clone())),
            Value::Array(items) if !items.is_empty() => items
                .iter()
                .map(|item| match item {
                    Value::String(address) if !address.is_empty() => Some(address.clone()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Self::Many),
            _ => None,
        }
    }

    /// Number of addresses.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(addresses) => addresses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailRequestError {
    #[error("Request body is not valid JSON: {0}")]
    Malformed(String),
    #[error("Missing required email fields (to, subject, or html).")]
    MissingFields,
}

/// A validated email request: every field is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    to: Recipients,
    subject: String,
    html: String,
}

impl EmailRequest {
    pub fn new(to: Recipients, subject: String, html: String) -> Result<Self, EmailRequestError> {
        if to.is_empty() || subject.is_empty() || html.is_empty() {
            return Err(EmailRequestError::MissingFields);
        }
        Ok(Self { to, subject, html })
    }

    /// Decode and validate a request body as delivered by a host.
    ///
    /// A missing body behaves like an empty object, so it fails field
    /// validation rather than parsing.
    pub fn from_body(body: RequestBody<'_>) -> Result<Self, EmailRequestError> {
        match body {
            RequestBody::Structured(value) => Self::try_from(value),
            RequestBody::Raw(bytes) => {
                let value: Value = serde_json::from_slice(bytes)
                    .map_err(|e| EmailRequestError::Malformed(e.to_string()))?;
                Self::try_from(&value)
            }
            RequestBody::Undecodable(reason) => {
                Err(EmailRequestError::Malformed(reason.to_string()))
            }
            RequestBody::Empty => Err(EmailRequestError::MissingFields),
        }
    }

    pub fn to(&self) -> &Recipients {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl TryFrom<&Value> for EmailRequest {
    type Error = EmailRequestError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let non_empty_str = |key: &str| match value.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };

        let to = value.get("to").and_then(Recipients::from_value);
        let subject = non_empty_str("subject");
        let html = non_empty_str("html");

        match (to, subject, html) {
            (Some(to), Some(subject), Some(html)) => Self::new(to, subject, html),
            _ => Err(EmailRequestError::MissingFields),
        }
    }
}
