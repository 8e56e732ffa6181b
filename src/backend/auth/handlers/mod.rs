//! Authentication HTTP Handlers
//!
//! Handlers for the authentication endpoints and the protected
//! dashboard data endpoint.
//!
//! # Endpoints
//!
//! - `POST /api/auth/register` - create an account
//! - `POST /api/auth/login` - verify credentials, mint a session token
//! - `POST /api/auth/logout` - clear the session cookie
//! - `GET /api/auth/me` - fresh snapshot of the current user (protected)
//! - `GET /api/dashboard` - identity-dependent dashboard data (protected)

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Session cookie clearing handler
pub mod logout;

/// Get current user handler
pub mod me;

/// Protected dashboard data handler
pub mod dashboard;

// Re-export the handlers
pub use dashboard::dashboard;
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use register::register;
