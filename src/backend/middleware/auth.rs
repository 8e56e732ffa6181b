/**
 * Authorization Gate
 *
 * Middleware protecting routes that require an authenticated session.
 * It extracts the session token from the request, verifies it, and
 * attaches the recovered claims to the request extensions. This is the
 * only place request-level authorization is enforced; handlers must
 * not parse tokens themselves.
 *
 * # Token Sources
 *
 * The `token` cookie takes precedence; the `Authorization: Bearer`
 * header is the fallback. When both are present the cookie wins, so a
 * request carrying conflicting tokens resolves deterministically.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::sessions::{verify_token, SessionClaims, SESSION_COOKIE};
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Authorization middleware.
///
/// 1. Extracts the session token (cookie first, then bearer header)
/// 2. Verifies signature and expiry
/// 3. Attaches the recovered [`SessionClaims`] to request extensions
///
/// Returns 401 before the handler runs when the token is missing or
/// invalid. The account is not re-read from the database here; claims
/// reflect the state at issuance time.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = token_from_request(&jar, &request).ok_or_else(|| {
        tracing::warn!("Missing session token on {}", request.uri().path());
        AuthError::InvalidToken
    })?;

    let claims = verify_token(&state.auth, &token).map_err(|e| {
        tracing::warn!("Rejected session token on {}", request.uri().path());
        e
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Pick the session token out of a request: cookie, else bearer
/// header.
fn token_from_request(jar: &CookieJar, request: &Request) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Axum extractor for the verified session claims.
///
/// Handlers behind the gate take this as a parameter to receive the
/// claims the middleware recovered.
#[derive(Clone, Debug)]
pub struct AuthSession(pub SessionClaims);

impl<S> axum::extract::FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(AuthSession)
            .ok_or_else(|| {
                tracing::warn!("SessionClaims not found in request extensions");
                AuthError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    fn request_with_headers(headers: &[(&str, &str)]) -> (CookieJar, Request) {
        let mut builder = axum::http::Request::builder().uri("http://example.com/api/dashboard");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(axum::body::Body::empty()).unwrap();

        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            header_map.insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                value.parse().unwrap(),
            );
        }
        (CookieJar::from_headers(&header_map), request)
    }

    #[test]
    fn test_no_token_sources() {
        let (jar, request) = request_with_headers(&[]);
        assert_eq!(token_from_request(&jar, &request), None);
    }

    #[test]
    fn test_token_from_bearer_header() {
        let (jar, request) = request_with_headers(&[("authorization", "Bearer abc123")]);
        assert_eq!(token_from_request(&jar, &request), Some("abc123".to_string()));
    }

    #[test]
    fn test_malformed_authorization_header_is_ignored() {
        let (jar, request) = request_with_headers(&[("authorization", "Basic abc123")]);
        assert_eq!(token_from_request(&jar, &request), None);
    }

    #[test]
    fn test_token_from_cookie() {
        let (jar, request) = request_with_headers(&[("cookie", "token=cookie-token")]);
        assert_eq!(
            token_from_request(&jar, &request),
            Some("cookie-token".to_string())
        );
    }

    #[test]
    fn test_cookie_takes_precedence_over_header() {
        let (jar, request) = request_with_headers(&[
            ("cookie", "token=cookie-token"),
            ("authorization", "Bearer header-token"),
        ]);
        assert_eq!(
            token_from_request(&jar, &request),
            Some("cookie-token".to_string())
        );
    }
}
