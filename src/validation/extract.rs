/**
 * Validated Body Extractor
 *
 * `Validated<T>` buffers the JSON body, checks it against `T`'s schema,
 * and only then deserializes into the typed request struct. Handlers that
 * take `Validated<T>` therefore never run on a payload that failed
 * validation, and a failure produces a 400 before any handler logic or
 * persistence call.
 */

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::validation::schema::Schema;

/// Request types that carry a validation schema.
pub trait ValidatedBody: DeserializeOwned {
    /// The schema checked against the raw JSON body before deserialization
    fn schema() -> &'static Schema;
}

/// JSON body that has passed its schema check.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatedBody,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;

        T::schema().check(&value)?;

        let body = serde_json::from_value(value)
            .map_err(|err| ApiError::malformed(format!("Invalid request body: {err}")))?;

        Ok(Validated(body))
    }
}

/// Parse a path id, hiding malformed ids as missing resources.
///
/// An id that is not even a well-formed identifier cannot name an existing
/// record, so it is reported exactly like one that names nothing: 404.
pub fn parse_resource_id(raw: &str, resource: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(resource))
}
