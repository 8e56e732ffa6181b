/**
 * Credential Verification
 *
 * Given an email and a plaintext password, decides whether the
 * credentials are valid and the account is usable. This is the only
 * code that ever touches `password_hash`.
 *
 * # Decision Order
 *
 * 1. Empty email or password fails with `InvalidInput` before any
 *    database access.
 * 2. Unknown email fails with `InvalidCredentials`, the same error a
 *    wrong password produces, so responses never reveal which accounts
 *    exist.
 * 3. An inactive account fails with `AccountDisabled` before the
 *    password is compared.
 * 4. The password is checked with bcrypt's verify primitive; mismatch
 *    fails with `InvalidCredentials`.
 *
 * There are no side effects beyond the read: no failed-attempt
 * counters and no lockout.
 */

use sqlx::PgPool;

use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::error::AuthError;

/// Hash a plaintext password with the configured bcrypt work factor.
pub fn hash_password(cost: u32, password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(AuthError::PasswordHash)
}

/// Verify an email/password pair against the user table.
///
/// # Returns
///
/// The verified account on success. The caller takes the session
/// claims snapshot from it and hands that to the token codec.
///
/// # Errors
///
/// * `InvalidInput` - empty email or password
/// * `InvalidCredentials` - unknown email or wrong password
/// * `AccountDisabled` - account exists but is inactive
pub async fn verify_credentials(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidInput);
    }

    let account = get_user_by_email(pool, email).await?;
    authenticate(account, password)
}

/// The pure decision core: no I/O, just the lookup result and the
/// candidate password.
fn authenticate(account: Option<User>, password: &str) -> Result<User, AuthError> {
    let user = match account {
        Some(user) => user,
        None => {
            tracing::warn!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !user.is_active {
        tracing::warn!("Login attempt for inactive account: {}", user.email);
        return Err(AuthError::AccountDisabled);
    }

    let valid = bcrypt::verify(password, &user.password_hash).map_err(AuthError::PasswordHash)?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    // Minimum bcrypt cost keeps the tests fast.
    const TEST_COST: u32 = 4;

    fn account(password: &str, is_active: bool) -> User {
        User {
            id: 42,
            email: "test@example.com".to_string(),
            name: Some("Test User".to_string()),
            password_hash: bcrypt::hash(password, TEST_COST).unwrap(),
            role: "user".to_string(),
            is_active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unknown_account_is_invalid_credentials() {
        let result = authenticate(None, "secret1");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_wrong_password_is_invalid_credentials() {
        let result = authenticate(Some(account("secret1", true)), "wrong");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_inactive_account_is_disabled() {
        let result = authenticate(Some(account("secret1", false)), "secret1");
        assert!(matches!(result, Err(AuthError::AccountDisabled)));
    }

    #[test]
    fn test_inactive_account_wins_over_wrong_password() {
        // The active check runs before the password comparison.
        let result = authenticate(Some(account("secret1", false)), "wrong");
        assert!(matches!(result, Err(AuthError::AccountDisabled)));
    }

    #[test]
    fn test_correct_password_returns_account() {
        let user = authenticate(Some(account("secret1", true)), "secret1").unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.role, "user");
        assert!(user.is_active);
    }

    #[test]
    fn test_hash_password_is_not_plaintext() {
        let hash = hash_password(TEST_COST, "secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(bcrypt::verify("secret1", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_empty_input_never_reaches_the_pool() {
        // A lazy pool performs no I/O until a query runs, so these
        // calls only pass if the input check fires first.
        let pool = PgPool::connect_lazy("postgres://localhost/carehub").unwrap();

        let result = verify_credentials(&pool, "", "secret1").await;
        assert!(matches!(result, Err(AuthError::InvalidInput)));

        let result = verify_credentials(&pool, "test@example.com", "").await;
        assert!(matches!(result, Err(AuthError::InvalidInput)));
    }
}
