/**
 * API Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers. Each
 * variant corresponds to one class of user-visible failure and carries
 * the human-readable reason sent to the client.
 *
 * # Taxonomy
 *
 * - `Unauthenticated` - no/empty credential header (401)
 * - `Malformed` - undecodable credential or request body (400)
 * - `Forbidden` - authenticated but not entitled (403)
 * - `NotFound` - resource absent, or foreign and hidden-as-absent (404)
 * - `Conflict` - duplicate unique field (400, matching the original API)
 * - `InvalidCredentials` - failed password/email check (400)
 * - `Validation` - schema violation with field-level detail (400)
 * - `Internal` - unexpected failure; detail is logged, never sent (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::validation::ValidationError;

/// API error returned by handlers, middleware, and extractors.
///
/// Handlers return `Result<_, ApiError>`; the `IntoResponse` impl in
/// `conversion` maps each variant to its status code and JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential was presented.
    #[error("Access denied. No token provided.")]
    Unauthenticated,

    /// The credential or request body could not be decoded.
    #[error("{message}")]
    Malformed {
        /// Human-readable reason
        message: String,
    },

    /// The caller is authenticated but not entitled to this operation.
    #[error("{message}")]
    Forbidden {
        /// Human-readable reason
        message: String,
    },

    /// The resource is absent, or belongs to another user and is hidden.
    #[error("{resource} not found.")]
    NotFound {
        /// Resource kind, e.g. "Note"
        resource: &'static str,
    },

    /// A unique field collides with an existing record.
    #[error("{message}")]
    Conflict {
        /// Human-readable reason
        message: String,
    },

    /// A password or email check failed.
    #[error("{message}")]
    InvalidCredentials {
        /// Human-readable reason
        message: String,
    },

    /// The request body violated its schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unexpected internal failure. The detail is logged at the response
    /// boundary; the client only ever sees the fixed generic message.
    #[error("Internal server error")]
    Internal {
        /// Internal detail, for the log only
        detail: String,
    },
}

impl ApiError {
    /// Create a malformed-input error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create a forbidden error with the standard message
    pub fn forbidden() -> Self {
        Self::Forbidden {
            message: "Access denied.".to_string(),
        }
    }

    /// Create a not-found error for the given resource kind
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create the login credential error.
    ///
    /// Unknown email and wrong password both produce this exact error so
    /// the response cannot be used to enumerate registered addresses.
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            message: "Invalid email or password.".to_string(),
        }
    }

    /// Create the current-password check error used by user update
    pub fn invalid_password() -> Self {
        Self::InvalidCredentials {
            message: "Invalid password.".to_string(),
        }
    }

    /// Create an internal error from any displayable detail
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self::Internal {
            detail: detail.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Malformed { .. } => StatusCode::BAD_REQUEST,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            // The original API reported duplicate unique fields as 400.
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials { .. } => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::malformed("Invalid token.").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::forbidden().status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::not_found("Note").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("Email already taken.").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::invalid_credentials().status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_names_resource() {
        assert_eq!(ApiError::not_found("Label").message(), "Label not found.");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = ApiError::internal("connection refused (127.0.0.1:5432)");
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_login_and_update_credential_messages_differ() {
        assert_eq!(
            ApiError::invalid_credentials().message(),
            "Invalid email or password."
        );
        assert_eq!(ApiError::invalid_password().message(), "Invalid password.");
    }
}
