//! Middleware Module
//!
//! Request-processing middleware. Currently this is the authorization
//! gate that protects member-only routes.

/// Authorization gate for protected routes
pub mod auth;

pub use auth::{auth_middleware, AuthSession};
