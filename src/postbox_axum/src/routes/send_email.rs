//! Axum-specific send email route.

use axum::{
    extract::{Request, State},
    response::Response,
};
use postbox_adapters::handlers;
use postbox_application::SendEmailUseCase;
use postbox_core::{CredentialSource, EmailClientFactory};

use crate::adapters::{AxumRequest, response_builder};

/// Axum send email route.
///
/// Mount it for every method: the handler itself answers non-POST requests
/// with 405, so the response shape stays the same for every outcome.
#[tracing::instrument(
    name = "Send email",
    skip(use_case, request),
    fields(method = %request.method())
)]
pub async fn send_email<F, C>(
    State(use_case): State<SendEmailUseCase<F, C>>,
    request: Request,
) -> Response
where
    F: EmailClientFactory + Clone + 'static,
    C: CredentialSource + Clone + 'static,
{
    let request = AxumRequest::buffer(request).await;

    handlers::handle_send_email(&use_case, &request, response_builder()).await
}
