use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::{any, get},
};
use postbox_adapters::config::{AllowedOrigins, HEALTH_CHECK_ROUTE};
use postbox_application::SendEmailUseCase;
use postbox_axum::routes::{health_check, send_email};
use postbox_core::{CredentialSource, EmailClientFactory};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The email dispatch service: one send endpoint plus a health probe
pub struct PostboxService {
    router: Router,
}

impl PostboxService {
    /// Create a new PostboxService serving `use_case` on `route`
    ///
    /// # Arguments
    /// * `use_case` - The configured send email use case (must be Clone)
    /// * `route` - Path of the send endpoint; a leading `/` is added if missing
    ///
    /// The send route accepts every method so that non-POST requests get the
    /// handler's 405 body rather than the router's empty one.
    pub fn new<F, C>(use_case: SendEmailUseCase<F, C>, route: &str) -> Self
    where
        F: EmailClientFactory + Clone + 'static,
        C: CredentialSource + Clone + 'static,
    {
        let route = if route.starts_with('/') {
            route.to_string()
        } else {
            format!("/{route}")
        };

        let router = Router::new()
            .route(&route, any(send_email::<F, C>))
            .route(HEALTH_CHECK_ROUTE, get(health_check))
            .with_state(use_case);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the PostboxService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Postbox listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
