//! Backend Error Module
//!
//! This module defines the error type shared by the authentication core
//! and the HTTP handlers, plus its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! [`AuthError`] implements `IntoResponse`, so handlers return it
//! directly and the boundary produces a JSON body of the form
//! `{"error": <message>, "status": <code>}`.

/// Error type definition
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
