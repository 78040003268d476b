pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email_request::{EmailRequest, EmailRequestError, Recipients},
    handler_response::HandlerResponse,
};

pub use ports::services::{
    CredentialSource, EmailClient, EmailClientFactory, EmailSendResult, ProviderError,
};

pub use http_abstraction::{DispatchRequest, DispatchResponseBuilder, RequestBody};
