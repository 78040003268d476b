//! Axum-specific route handlers.
//!
//! Routes buffer the Axum request, call the framework-agnostic handler and
//! return its Axum response.

pub mod health_check;
pub mod send_email;

pub use health_check::health_check;
pub use send_email::send_email;
