//! CareHub - Main Library
//!
//! CareHub is the backend for a small marketing site with account-based
//! access: visitors register and log in with email and password, and
//! authenticated members reach a protected dashboard.
//!
//! # Overview
//!
//! This library provides:
//! - Credential verification against bcrypt password hashes
//! - Stateless session tokens (signed JWTs with a fixed validity window)
//! - An Axum HTTP server exposing the authentication endpoints
//! - A single authorization gate protecting member-only routes
//!
//! # Module Structure
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server setup and route configuration
//!   - Authentication core (verifier, token codec, user storage)
//!   - Authorization middleware and error types
//!
//! # Usage
//!
//! ```rust,no_run
//! use carehub::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```

/// Server-side code
pub mod backend;
