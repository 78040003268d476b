//! Axum integration for the postbox dispatch handler.
//!
//! This crate binds the host-agnostic handler defined in `postbox_adapters`
//! to Axum.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  postbox_core: dispatch trait definitions│
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  postbox_axum: Axum implementations      │
//! │  - AxumRequest (buffered body)           │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, routing::any};
//! use postbox_axum::routes;
//!
//! let app = Router::new()
//!     .route("/api/send-email", any(routes::send_email::<F, C>))
//!     .with_state(use_case);
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
