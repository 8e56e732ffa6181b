//! Backend Module
//!
//! This module contains all server-side code for the CareHub site.
//! It provides an Axum HTTP server with a username/password
//! authentication flow and a protected dashboard endpoint.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential verification, session tokens, user storage
//! - **`middleware`** - The authorization gate for protected routes
//! - **`error`** - Backend-specific error types
//!
//! # Request Flow
//!
//! 1. `POST /api/auth/login` hands email and password to the credential
//!    verifier; on success the token codec mints a signed session token
//!    which travels back as an HTTP-only cookie (and in the JSON body).
//! 2. Subsequent requests to protected routes pass through the
//!    authorization gate, which recovers the session claims from the
//!    token and hands them to the route handler.
//!
//! # Error Handling
//!
//! All request-level failures are expressed as [`error::AuthError`] and
//! converted to JSON responses at the boundary; none are fatal to the
//! process.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Credential verification, session tokens, user storage
pub mod auth;

/// Authorization middleware for protected routes
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::AuthError;
pub use server::create_app;
