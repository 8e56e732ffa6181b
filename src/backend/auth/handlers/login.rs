/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Hand email and password to the credential verifier
 * 2. Snapshot the session claims from the verified account
 * 3. Mint a signed session token
 * 4. Return token and user info, and set the session cookie
 *
 * # Security Notes
 *
 * - Unknown email and wrong password return the same 401 error
 * - An inactive account returns 403 even before the password check
 * - The cookie is HTTP-only, `SameSite=Lax`, `Secure` in production
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json, Response},
};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::backend::auth::sessions::{issue_token, session_cookie, SessionClaims};
use crate::backend::auth::verifier::verify_credentials;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Login handler.
///
/// # Errors
///
/// * `400 Bad Request` - missing email or password
/// * `401 Unauthorized` - unknown email or wrong password
/// * `403 Forbidden` - account exists but is inactive
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - database or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::DatabaseUnavailable
    })?;

    tracing::info!("Login request for: {}", request.email);

    let user = verify_credentials(pool, &request.email, &request.password).await?;

    let claims = SessionClaims::for_user(&user);
    let token = issue_token(&state.auth, &claims)?;
    let cookie = session_cookie(&state.auth, &token);

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    let body = Json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserResponse::from(&user),
        token,
    });

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), body).into_response())
}
