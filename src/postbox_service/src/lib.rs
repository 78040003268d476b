//! Standalone HTTP service and function entry point for postbox.

pub mod helpers;
pub mod postbox_service;
pub mod telemetry;

pub use helpers::{ResendSendEmailUseCase, configure_use_case};
pub use postbox_service::PostboxService;
pub use telemetry::init_tracing;
