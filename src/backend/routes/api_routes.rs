/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints and the protected
 * dashboard endpoint into the router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Clear the session cookie
 *
 * ## Protected (authorization gate)
 * - `GET /api/auth/me` - Fresh snapshot of the current user
 * - `GET /api/dashboard` - Identity-dependent dashboard data
 */

use axum::{middleware, Router};

use crate::backend::auth::{dashboard, get_me, login, logout, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes.
///
/// The protected routes share a single `route_layer` running the
/// authorization gate, so token parsing happens in exactly one place.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state handed to the gate
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", axum::routing::get(get_me))
        .route("/api/dashboard", axum::routing::get(dashboard))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        // Authentication endpoints
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        .merge(protected)
}
