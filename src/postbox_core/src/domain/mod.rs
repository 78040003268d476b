pub mod email_request;
pub mod handler_response;
