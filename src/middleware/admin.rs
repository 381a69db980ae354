/**
 * Role Guard
 *
 * Restricts a route to admin identities. Depends on the authentication
 * guard having attached the identity, so it must be layered inside it
 * (auth runs first).
 */

use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::identity::Identity;
use crate::error::ApiError;

/// Admin-only middleware: 403 for any non-admin identity.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let identity = request
        .extensions()
        .get::<Identity>()
        .copied()
        .ok_or(ApiError::Unauthenticated)?;

    if !identity.is_admin() {
        tracing::warn!("user {} denied admin-only route", identity.id);
        return Err(ApiError::forbidden());
    }

    Ok(next.run(request).await)
}
