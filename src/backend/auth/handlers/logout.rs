/**
 * Logout Handler
 *
 * This module implements the logout handler for POST /api/auth/logout.
 *
 * Logout clears the client-held session cookie by setting it with
 * `Max-Age=0`. There is no server-side revocation list, so any other
 * copy of the token (for example one captured from the bearer header)
 * stays valid until its natural expiry.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json, Response},
};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::sessions::clear_session_cookie;
use crate::backend::server::state::AppState;

/// Logout handler. Always succeeds; no token is required.
pub async fn logout(State(state): State<AppState>) -> Response {
    tracing::info!("Logout request");

    let cookie = clear_session_cookie(&state.auth);

    let body = Json(MessageResponse {
        message: "Logout successful".to_string(),
    });

    (AppendHeaders([(SET_COOKIE, cookie)]), body).into_response()
}
