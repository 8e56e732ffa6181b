/**
 * Dashboard Handler
 *
 * Protected endpoint backing the member dashboard. The payload is
 * built from the verified session claims alone; no database read.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::DashboardResponse;
use crate::backend::middleware::auth::AuthSession;

/// Dashboard data handler.
pub async fn dashboard(AuthSession(claims): AuthSession) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: format!("Welcome back, {}", claims.email),
        user_id: claims.user_id,
        email: claims.email,
        role: claims.role,
    })
}
