/**
 * Session Tokens
 *
 * This module is the session token codec: it turns a verified identity
 * into a signed, time-limited bearer token (an HS256 JWT) and recovers
 * the identity claims from incoming tokens. It also owns the cookie
 * transport for the token.
 *
 * # Lifecycle
 *
 * Claims are snapshotted from the account at login, embedded into a
 * token with a fixed validity window, and reconstructed on every
 * subsequent request. They are never mutated and never re-checked
 * against the database here; a token stays valid until its expiry even
 * if the account changes afterwards.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::backend::error::AuthError;
use crate::backend::server::config::AuthConfig;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Identity snapshot carried inside a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub user_id: i64,
    /// Email at issuance time
    pub email: String,
    /// Role at issuance time
    pub role: String,
    /// Active flag at issuance time
    pub is_active: bool,
}

impl SessionClaims {
    /// Snapshot the claims for a verified account.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            is_active: user.is_active,
        }
    }
}

/// Wire form of the claims, with the registered time claims.
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    user_id: i64,
    email: String,
    role: String,
    is_active: bool,
    /// Issued at (Unix timestamp, seconds)
    iat: i64,
    /// Expiration time (Unix timestamp, seconds)
    exp: i64,
}

impl From<TokenClaims> for SessionClaims {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
            is_active: claims.is_active,
        }
    }
}

/// Issue a signed session token for a verified identity.
///
/// The expiry is a fixed offset from the issuance instant, taken from
/// `config.token_ttl_secs`.
pub fn issue_token(config: &AuthConfig, claims: &SessionClaims) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();

    let token_claims = TokenClaims {
        user_id: claims.user_id,
        email: claims.email.clone(),
        role: claims.role.clone(),
        is_active: claims.is_active,
        iat: now,
        exp: now + config.token_ttl_secs,
    };

    encode(
        &Header::default(),
        &token_claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(AuthError::TokenCreation)
}

/// Verify a session token and recover its claims.
///
/// Fails with `InvalidToken` when the token is structurally malformed,
/// the signature does not match the configured secret, or the expiry
/// has passed. This is the only function allowed to gate access
/// decisions.
pub fn verify_token(config: &AuthConfig, token: &str) -> Result<SessionClaims, AuthError> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!("Token rejected: {:?}", e);
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims.into())
}

/// Extract claims from a structurally valid token WITHOUT checking the
/// signature or the expiry.
///
/// Diagnostic use only (inspecting what a client presented). Never use
/// this to authorize access; only [`verify_token`] may do that.
pub fn decode_unverified(token: &str) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|_| AuthError::InvalidToken)?;

    Ok(token_data.claims.into())
}

/// Build the `Set-Cookie` value carrying a freshly issued token.
///
/// HTTP-only, `SameSite=Lax`, path `/`, max-age equal to the token
/// validity window, `Secure` in production.
pub fn session_cookie(config: &AuthConfig, token: &str) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, token, config.token_ttl_secs
    );
    if config.secure_cookies {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the session cookie.
///
/// Only the client-held copy is invalidated; any other copy of the
/// token stays valid until its natural expiry.
pub fn clear_session_cookie(config: &AuthConfig) -> String {
    let mut cookie = format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    );
    if config.secure_cookies {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_secs: 3600,
            bcrypt_cost: 4,
            secure_cookies: false,
        }
    }

    fn test_claims() -> SessionClaims {
        SessionClaims {
            user_id: 42,
            email: "test@example.com".to_string(),
            role: "user".to_string(),
            is_active: true,
        }
    }

    /// Flip a byte of the signature segment.
    fn tamper(token: &str) -> String {
        let (head, sig) = token.rsplit_once('.').unwrap();
        let first = sig.chars().next().unwrap();
        let flipped = if first == 'A' { 'B' } else { 'A' };
        format!("{}.{}{}", head, flipped, &sig[1..])
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let claims = test_claims();

        let token = issue_token(&config, &claims).unwrap();
        assert!(!token.is_empty());

        let recovered = verify_token(&config, &token).unwrap();
        assert_eq!(recovered, claims);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Negative validity puts the expiry well past the default
        // leeway.
        let config = AuthConfig {
            token_ttl_secs: -3600,
            ..test_config()
        };

        let token = issue_token(&config, &test_claims()).unwrap();
        let result = verify_token(&config, &token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let config = test_config();
        let token = issue_token(&config, &test_claims()).unwrap();

        let result = verify_token(&config, &tamper(&token));
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let token = issue_token(&config, &test_claims()).unwrap();

        let other = AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..test_config()
        };
        let result = verify_token(&other, &token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let config = test_config();
        let result = verify_token(&config, "not.a.token");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_decode_unverified_ignores_expiry_and_signature() {
        let config = AuthConfig {
            token_ttl_secs: -3600,
            ..test_config()
        };
        let claims = test_claims();
        let token = issue_token(&config, &claims).unwrap();

        // Expired and tampered, but the claims still come out.
        let recovered = decode_unverified(&tamper(&token)).unwrap();
        assert_eq!(recovered, claims);
    }

    #[test]
    fn test_decode_unverified_rejects_garbage() {
        let result = decode_unverified("garbage");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = test_config();
        let cookie = session_cookie(&config, "abc123");

        assert!(cookie.starts_with("token=abc123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        let config = AuthConfig {
            secure_cookies: true,
            ..test_config()
        };
        assert!(session_cookie(&config, "abc123").ends_with("; Secure"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let cookie = clear_session_cookie(&test_config());
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
