/**
 * Login Handler
 *
 * POST /api/login: verifies email + password and returns a fresh token.
 *
 * # Security
 *
 * Unknown email and wrong password produce the identical 400 response, so
 * the endpoint cannot be used to enumerate registered addresses. Password
 * comparison goes through bcrypt.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use serde::{Deserialize, Serialize};

use crate::auth::identity::Identity;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::model::find_by_email;
use crate::validation::{Field, Rule, Schema, Validated, ValidatedBody};

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Registered email address
    pub email: String,
    /// Plaintext password, verified against the stored hash
    pub password: String,
}

static LOGIN_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("email", Rule::email(5, 255)),
        Field::required("password", Rule::string(5, 255)),
    ],
    with: &[],
};

impl ValidatedBody for LoginRequest {
    fn schema() -> &'static Schema {
        &LOGIN_SCHEMA
    }
}

/// Login response: the fresh token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed identity token
    pub token: String,
}

/// Login handler.
///
/// # Errors
///
/// * `400` - schema failure, unknown email, or wrong password (the latter
///   two with one identical message)
pub async fn login(
    State(state): State<AppState>,
    Validated(request): Validated<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = find_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login with unknown email");
            ApiError::invalid_credentials()
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("failed login for user {}", user.id);
        return Err(ApiError::invalid_credentials());
    }

    let identity = Identity {
        id: user.id,
        role: user.role,
    };
    let token = state.tokens.issue(&identity)?;

    tracing::info!("user logged in: {}", user.id);
    Ok(Json(TokenResponse { token }))
}
