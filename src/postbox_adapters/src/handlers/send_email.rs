//! Framework-agnostic send email handler.

use postbox_application::SendEmailUseCase;
use postbox_core::{CredentialSource, DispatchRequest, DispatchResponseBuilder, EmailClientFactory};

/// Handle a send email request - framework agnostic.
///
/// Validates the request, performs at most one provider call and writes the
/// outcome into the host's envelope. Every path yields exactly one response.
///
/// # Arguments
///
/// * `use_case` - The configured send email use case
/// * `request` - The inbound request (host-specific but implements our trait)
/// * `builder` - Response builder for the host's envelope
///
/// # Example
///
/// ```ignore
/// pub async fn axum_send_email(
///     State(use_case): State<SendEmailUseCase<F, C>>,
///     request: Request,
/// ) -> Response {
///     let request = AxumRequest::buffer(request).await;
///     handle_send_email(&use_case, &request, response_builder()).await
/// }
/// ```
pub async fn handle_send_email<F, C, R, B>(
    use_case: &SendEmailUseCase<F, C>,
    request: &R,
    builder: B,
) -> B::Response
where
    F: EmailClientFactory,
    C: CredentialSource,
    R: DispatchRequest + Sync + ?Sized,
    B: DispatchResponseBuilder,
{
    use_case.respond(request).await.write(builder)
}
