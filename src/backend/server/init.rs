/**
 * Server Initialization
 *
 * This module assembles the Axum application: configuration loading,
 * optional database pool, application state, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load authentication settings from the environment
 * 2. Load the optional database pool
 * 3. Build the application state
 * 4. Create and configure the router
 *
 * The server is resilient to a missing database: endpoints that need
 * it answer 503 while everything else keeps working.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, AuthConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Returns
///
/// Configured Axum Router ready to serve requests.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing CareHub backend server");

    let auth = AuthConfig::from_env();
    let db_pool = load_database().await;

    let app_state = AppState { db_pool, auth };

    create_router(app_state)
}
