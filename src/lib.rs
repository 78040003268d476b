//! # Postbox - Email Dispatch Library
//!
//! This is a facade crate that re-exports all public APIs from the postbox components.
//! Use this crate to get access to the whole dispatch pipeline in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! postbox = { path = "../postbox" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `EmailRequest`, `Recipients`, `HandlerResponse`
//! - **Ports**: `EmailClient`, `EmailClientFactory`, `CredentialSource`
//! - **Use cases**: `SendEmailUseCase`
//! - **Adapters**: `ResendEmailClient`, `EnvCredentials`, the function host envelope
//! - **Service**: `PostboxService` - The standalone HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use postbox_core::*;
}

// Re-export most commonly used core types at the root level
pub use postbox_core::{
    EmailRequest, EmailRequestError, HandlerResponse, ProviderError, Recipients,
};

// ============================================================================
// Ports
// ============================================================================

pub use postbox_core::{
    CredentialSource, DispatchRequest, DispatchResponseBuilder, EmailClient, EmailClientFactory,
    EmailSendResult, RequestBody,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use postbox_application::*;
}

pub use postbox_application::{DispatchError, DispatchOptions, SendEmailUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Email client implementations
    pub mod email {
        pub use postbox_adapters::email::*;
    }

    /// API key sources
    pub mod credentials {
        pub use postbox_adapters::credentials::*;
    }

    /// Function host envelope
    pub mod function {
        pub use postbox_adapters::function::*;
    }

    /// Framework-agnostic handlers
    pub mod handlers {
        pub use postbox_adapters::handlers::*;
    }

    /// Configuration
    pub mod config {
        pub use postbox_adapters::config::*;
    }

    /// Axum host adapters and routes
    pub mod axum {
        pub use postbox_axum::*;
    }
}

// Re-export commonly used adapters at root level
pub use postbox_adapters::{
    credentials::{EnvCredentials, StaticCredentials},
    email::{MockEmailClient, MockEmailClientFactory, ResendEmailClient, ResendEmailClientFactory},
    function::{FunctionEvent, FunctionResponse, handle_function_event},
    handlers::handle_send_email,
};

// ============================================================================
// Postbox Service (Main Entry Point)
// ============================================================================

/// Main dispatch service
pub use postbox_service::{PostboxService, ResendSendEmailUseCase, configure_use_case};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
