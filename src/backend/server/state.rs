/**
 * Application State Management
 *
 * This module defines the application state shared across all request
 * handlers.
 *
 * # Thread Safety
 *
 * `AppState` is cheap to clone: the pool is internally reference
 * counted and `AuthConfig` is a small immutable value. There is no
 * shared mutable in-process state between requests; every request is
 * handled independently from its inputs plus these two constants.
 */

use sqlx::PgPool;

use crate::backend::server::config::AuthConfig;

/// Application state for the Axum router.
///
/// # Fields
///
/// * `db_pool` - Optional PostgreSQL connection pool. `None` when
///   `DATABASE_URL` is not configured; handlers answer 503 in that
///   case.
/// * `auth` - Authentication settings (signing secret, token validity
///   window, bcrypt cost), read once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, if configured.
    pub db_pool: Option<PgPool>,
    /// Authentication settings.
    pub auth: AuthConfig,
}
