//! Authentication Module
//!
//! This module handles user authentication, registration, and session
//! management. It provides the credential verification core, the
//! session token codec, and the HTTP handlers for the authentication
//! endpoints.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`verifier`** - Credential verification (lookup, active check, bcrypt)
//! - **`sessions`** - Session token issuance and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── verifier.rs     - Credential verification
//! ├── sessions.rs     - Session token codec and cookie transport
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     ├── logout.rs   - Session cookie clearing handler
//!     ├── me.rs       - Get current user handler
//!     └── dashboard.rs- Protected dashboard data handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password arrive, the password is hashed
//!    with bcrypt, and the account is created. No token is issued.
//! 2. **Login**: the credential verifier checks the account, then the
//!    token codec mints a signed session token. The token is returned
//!    in the body and set as an HTTP-only cookie.
//! 3. **Protected requests**: the authorization gate recovers the
//!    session claims from the token; handlers never parse tokens
//!    themselves.
//! 4. **Logout**: the session cookie is cleared. Tokens held elsewhere
//!    stay valid until their natural expiry; there is no server-side
//!    revocation list.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and verified with
//!   bcrypt's own verify primitive, never raw hash equality
//! - Unknown email and wrong password produce the same error, so
//!   responses do not reveal which accounts exist
//! - Password hashes are never serialized into any response

/// User data model and database operations
pub mod users;

/// Credential verification
pub mod verifier;

/// Session token issuance and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{dashboard, get_me, login, logout, register};
pub use sessions::SessionClaims;
