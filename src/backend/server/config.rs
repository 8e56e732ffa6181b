/**
 * Server Configuration
 *
 * This module loads the two process-wide authentication constants (the
 * token-signing secret and the password-hashing cost) into an explicit
 * `AuthConfig` value, and creates the optional PostgreSQL connection
 * pool.
 *
 * # Configuration Sources
 *
 * Everything is read from environment variables once at startup, with
 * development defaults where that is safe. Configuration errors are
 * logged but do not prevent server startup: a missing database simply
 * disables the database-backed endpoints.
 */

use sqlx::PgPool;

/// Default session validity window: 7 days, in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Authentication settings shared by the credential verifier and the
/// session token codec.
///
/// Both components receive this by value or reference instead of
/// reading hidden globals, so tests can run them with throwaway
/// secrets and a low hashing cost.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Symmetric secret used to sign and verify session tokens.
    pub jwt_secret: String,
    /// Token validity window in seconds, applied at issuance.
    pub token_ttl_secs: i64,
    /// bcrypt work factor for password hashing.
    pub bcrypt_cost: u32,
    /// Whether session cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// Load authentication settings from the environment.
    ///
    /// * `JWT_SECRET` - signing secret; a development fallback is used
    ///   (with a warning) when unset.
    /// * `JWT_EXPIRES_IN` - validity window in seconds, default 7 days.
    /// * `BCRYPT_COST` - hashing work factor, default `bcrypt::DEFAULT_COST`.
    /// * `APP_ENV` - `production` switches cookies to `Secure`.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development fallback");
            "your-secret-key-change-this-in-production".to_string()
        });

        let token_ttl_secs = std::env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        let secure_cookies = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        Self {
            jwt_secret,
            token_ttl_secs,
            bcrypt_cost,
            secure_cookies,
        }
    }
}

/// Database configuration result
///
/// Contains the connection pool if successfully configured, or `None`
/// if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool.
///
/// Reads `DATABASE_URL` from the environment and connects. The schema
/// is provisioned externally; this function only establishes the pool.
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// Errors are logged but do not prevent server startup. Handlers that
/// need the database answer 503 while it is unavailable.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    Some(pool)
}
