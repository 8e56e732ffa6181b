/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which
 * returns a fresh snapshot of the currently authenticated user.
 *
 * The route sits behind the authorization gate, so the handler only
 * sees requests whose token already verified. Unlike the gate itself,
 * this endpoint re-reads the account from the database: a user deleted
 * after issuance answers 404, one deactivated after issuance answers
 * 403.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{MeResponse, UserResponse};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::AuthError;
use crate::backend::middleware::auth::AuthSession;
use crate::backend::server::state::AppState;

/// Get current user handler.
///
/// # Errors
///
/// * `404 Not Found` - account no longer exists
/// * `403 Forbidden` - account has been deactivated
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - database failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthSession(claims): AuthSession,
) -> Result<Json<MeResponse>, AuthError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::DatabaseUnavailable
    })?;

    let user = get_user_by_id(pool, claims.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", claims.user_id);
            AuthError::UserNotFound
        })?;

    if !user.is_active {
        tracing::warn!("Inactive account presented a valid token: {}", user.id);
        return Err(AuthError::AccountDisabled);
    }

    Ok(Json(MeResponse {
        user: UserResponse::from(&user),
    }))
}
