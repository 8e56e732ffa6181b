/**
 * Authentication Handler Types
 *
 * Request and response types shared across the authentication
 * handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Registration request.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Email address, the unique lookup key
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Plaintext password (hashed before storage)
    pub password: String,
    /// Optional role, defaults to "user"
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// User information safe to return to clients.
///
/// Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Response for a successful registration. No token is issued at
/// registration; the client logs in next.
#[derive(Serialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Response for a successful login.
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    /// The session token, also set as an HTTP-only cookie
    pub token: String,
}

/// Response carrying only a human-readable message.
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for the current-user endpoint.
#[derive(Serialize, Debug)]
pub struct MeResponse {
    pub user: UserResponse,
}

/// Identity-dependent dashboard payload, built from the session
/// claims alone.
#[derive(Serialize, Debug)]
pub struct DashboardResponse {
    pub message: String,
    pub user_id: i64,
    pub email: String,
    pub role: String,
}
