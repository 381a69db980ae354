/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses and adapts
 * collaborator errors (database, password hashing, token codec) into the
 * API taxonomy.
 *
 * # Response Format
 *
 * 4xx errors are returned as JSON:
 * ```json
 * {
 *   "error": "Note not found.",
 *   "status": 404
 * }
 * ```
 *
 * Internal errors are logged here - the single catch point for unexpected
 * failures - and surfaced with the fixed generic message, never the detail.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::auth::tokens::TokenError;
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { detail } = &self {
            tracing::error!("internal error: {detail}");
        }

        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(format!("database error: {err}"))
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("password hashing error: {err}"))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("serialization error: {err}"))
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            // Constant-shape client error: every verification failure looks
            // the same, whatever the underlying cause was.
            TokenError::Invalid => Self::malformed("Invalid token."),
            TokenError::Issue(err) => Self::internal(format!("token issuance error: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_failure_maps_to_bad_request() {
        let err: ApiError = TokenError::Invalid.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid token.");
    }

    #[test]
    fn test_database_error_maps_to_internal() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }
}
