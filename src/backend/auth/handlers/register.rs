/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate that email and password are present
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Create the account (active, role defaulting to "user")
 * 5. Return the created user
 *
 * No session token is issued at registration; the client follows up
 * with a login.
 *
 * # Security
 *
 * - Passwords are hashed with the configured bcrypt work factor
 * - The password and its hash are never returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse, UserResponse};
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::auth::verifier::hash_password;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Registration handler.
///
/// # Errors
///
/// * `400 Bad Request` - missing email or password, or email already
///   registered
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::DatabaseUnavailable
    })?;

    tracing::info!("Register request for: {}", request.email);

    if request.email.is_empty() || request.password.is_empty() {
        return Err(AuthError::InvalidInput);
    }

    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(AuthError::EmailTaken);
    }

    let password_hash = hash_password(state.auth.bcrypt_cost, &request.password)?;

    let role = request.role.as_deref().unwrap_or("user");
    let user = create_user(
        pool,
        &request.email,
        request.name.as_deref(),
        &password_hash,
        role,
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            user: UserResponse::from(&user),
        }),
    ))
}
