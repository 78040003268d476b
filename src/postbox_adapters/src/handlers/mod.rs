//! Framework-agnostic dispatch handlers.
//!
//! These handlers contain the whole request/response contract without any
//! framework dependencies. Host adapters wrap their request, call a handler,
//! and hand back whatever their response builder produces.

pub mod send_email;

pub use send_email::handle_send_email;
