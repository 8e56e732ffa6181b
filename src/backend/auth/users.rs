/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. The schema is
 * provisioned externally; everything here goes through the pool.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// User struct representing a row in the `users` table.
///
/// `password_hash` never leaves this module's callers in serialized
/// form: it is skipped by serde, and API responses use a separate
/// response type.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// User email address (unique lookup key)
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Authorization tag, `"user"` or `"admin"`
    pub role: String,
    /// Whether the account may obtain or use a session
    pub is_active: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user.
///
/// New accounts are created active; the caller supplies the already
/// hashed password.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `name` - Optional display name
/// * `password_hash` - Hashed password
/// * `role` - Authorization tag
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    name: Option<&str>,
    password_hash: &str,
    role: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, password_hash, role, is_active, created_at)
        VALUES ($1, $2, $3, $4, TRUE, $5)
        RETURNING id, email, name, password_hash, role, is_active, created_at
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email.
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, role, is_active, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID.
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, role, is_active, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            email: "test@example.com".to_string(),
            name: None,
            password_hash: "$2b$04$secret".to_string(),
            role: "user".to_string(),
            is_active: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$04$secret"));
    }
}
