/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (auth, dashboard)
 * 2. Static files (marketing pages and assets)
 * 3. Fallback handler (404)
 */

use axum::{http::StatusCode, Router};
use tower_http::services::ServeDir;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured.
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, auth settings)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Add static file serving for the marketing pages
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}
