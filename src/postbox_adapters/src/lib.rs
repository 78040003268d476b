pub mod config;
pub mod credentials;
pub mod email;
pub mod function;
pub mod handlers;
