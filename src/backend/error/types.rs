/**
 * Backend Error Types
 *
 * This module defines the error type used across the authentication
 * flow. Every request-level failure is expressed as an `AuthError` and
 * mapped to an HTTP status at the response boundary.
 *
 * # Security Notes
 *
 * - Unknown email and wrong password share the `InvalidCredentials`
 *   variant so responses never reveal which accounts exist.
 * - Infrastructure variants (`Database`, `PasswordHash`,
 *   `TokenCreation`) display a generic message; the underlying cause is
 *   kept as the error source for logging only.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the authentication flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was missing or empty.
    #[error("Email and password are required")]
    InvalidInput,

    /// Unknown email or wrong password. Deliberately merged.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    #[error("Your account is inactive. Please contact an administrator")]
    AccountDisabled,

    /// The session token is missing, malformed, mis-signed, or expired.
    #[error("Invalid or missing authentication token")]
    InvalidToken,

    /// Registration attempted with an email that is already taken.
    #[error("Email is already registered")]
    EmailTaken,

    /// The account behind a valid token no longer exists.
    #[error("User not found")]
    UserNotFound,

    /// The database pool is not configured.
    #[error("Database not configured")]
    DatabaseUnavailable,

    /// A database query failed.
    #[error("Something went wrong")]
    Database(#[from] sqlx::Error),

    /// bcrypt hashing or verification failed.
    #[error("Something went wrong")]
    PasswordHash(#[source] bcrypt::BcryptError),

    /// Signing a new session token failed.
    #[error("Something went wrong")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::AccountDisabled => StatusCode::FORBIDDEN,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::PasswordHash(_) | Self::TokenCreation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(AuthError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::AccountDisabled.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::DatabaseUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AuthError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let error = AuthError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.to_string(), "Something went wrong");
    }
}
