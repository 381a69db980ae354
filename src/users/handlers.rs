/**
 * User Handlers
 *
 * HTTP handlers for the /api/users routes.
 *
 * # Routes
 *
 * - `POST /api/users` - registration (public)
 * - `GET /api/users/me` - current user's profile
 * - `GET /api/users` - all users (admin)
 * - `GET /api/users/{id}` - single user (admin)
 * - `PUT /api/users/{id}` - self-service profile update
 * - `DELETE /api/users/{id}` - self-service account deletion
 *
 * The self-service routes apply the revealing ownership check: the path id
 * is caller-supplied, so a mismatch is an explicit 403 rather than a 404.
 */

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue},
    response::Json,
};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::identity::Identity;
use crate::auth::policy::ensure_self;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::model;
use crate::users::types::{
    CreateUserRequest, UpdateUserRequest, UserProfileResponse, UserResponse,
};
use crate::validation::{parse_resource_id, Validated};

/// Response header carrying the freshly issued token on registration
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Registration handler.
///
/// Creates a regular account, issues a token for it, and returns the token
/// in the `x-auth-token` response header alongside the public user shape.
///
/// # Errors
///
/// * `400` - schema failure, or the email is already registered
pub async fn register(
    State(state): State<AppState>,
    Validated(request): Validated<CreateUserRequest>,
) -> Result<(HeaderMap, Json<UserResponse>), ApiError> {
    if model::find_by_email(&state.pool, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("registration with already-registered email");
        return Err(ApiError::conflict("Email already taken."));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let user = model::create_user(&state.pool, &request.name, &request.email, &password_hash)
        .await?;

    let identity = Identity {
        id: user.id,
        role: user.role,
    };
    let token = state.tokens.issue(&identity)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTH_TOKEN_HEADER,
        HeaderValue::from_str(&token).map_err(ApiError::internal)?,
    );

    tracing::info!("user registered: {}", user.id);
    Ok((headers, Json(UserResponse::from(user))))
}

/// Current user's profile.
///
/// # Errors
///
/// * `404` - the record behind the token no longer exists
pub async fn current_user(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let user = model::find_by_id(&pool, identity.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// All users, admin only (the role guard runs before this handler)
pub async fn list_users(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<UserProfileResponse>>, ApiError> {
    let users = model::list_all(&pool).await?;

    Ok(Json(
        users.into_iter().map(UserProfileResponse::from).collect(),
    ))
}

/// Single user by id, admin only
pub async fn get_user(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let id = parse_resource_id(&id, "User")?;

    let user = model::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Self-service profile update.
///
/// A password change requires the current password: it is verified against
/// the stored hash before the new one is committed. A `newPassword` without
/// the current `password` is a credential failure, not a schema failure.
///
/// # Errors
///
/// * `403` - path id is not the caller's own
/// * `404` - malformed path id, or the record is absent
/// * `400` - schema failure, email collision, or failed password check
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
    Validated(request): Validated<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_resource_id(&id, "User")?;
    ensure_self(&identity, id)?;

    let user = model::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    if let Some(existing) = model::find_by_email(&state.pool, &request.email).await? {
        if existing.id != user.id {
            return Err(ApiError::conflict("Email already taken."));
        }
    }

    let new_hash = match (&request.password, &request.new_password) {
        (None, None) => None,
        (None, Some(_)) => {
            tracing::warn!("password change without current password for {}", user.id);
            return Err(ApiError::invalid_password());
        }
        (Some(current), Some(new_password)) => {
            if !verify(current, &user.password_hash)? {
                tracing::warn!("failed password check for {}", user.id);
                return Err(ApiError::invalid_password());
            }
            Some(hash(new_password, DEFAULT_COST)?)
        }
        // The schema's co-presence rule already rejected this shape.
        (Some(_), None) => {
            return Err(crate::validation::ValidationError::new("newPassword", "is required").into())
        }
    };

    let updated = model::update_profile(
        &state.pool,
        id,
        &request.name,
        &request.email,
        new_hash.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(UserResponse::from(updated)))
}

/// Self-service account deletion.
///
/// # Errors
///
/// * `403` - path id is not the caller's own
/// * `404` - malformed path id, or the record is absent
pub async fn delete_user(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_resource_id(&id, "User")?;
    ensure_self(&identity, id)?;

    let user = model::delete_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    tracing::info!("user deleted: {}", user.id);
    Ok(Json(UserResponse::from(user)))
}
