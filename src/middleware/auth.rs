/**
 * Authentication Guard
 *
 * Runs once per protected request, before any handler logic. Extracts the
 * credential from the `Authorization` header, verifies it with the token
 * codec, and attaches the decoded identity to the request extensions.
 *
 * # Outcomes
 *
 * - Missing or empty header: 401 (no credential presented)
 * - Present but unverifiable: 400 (credential undecodable)
 * - Valid: identity attached, request proceeds
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::identity::Identity;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authentication middleware.
///
/// Accepts the token either bare or with a `Bearer ` prefix.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() {
        tracing::warn!("request without credential header");
        return Err(ApiError::Unauthenticated);
    }

    let identity = state.tokens.verify(token)?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`require_auth`].
///
/// Used as a handler parameter on protected routes. Rejects with 401 if
/// the guard did not run, which would mean the route is mislayered.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .copied()
            .map(AuthUser)
            .ok_or(ApiError::Unauthenticated)
    }
}
