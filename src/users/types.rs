/**
 * User Request/Response Types
 *
 * Request bodies carry their validation schemas; the password bounds are
 * the storage bound (minimum 5) applied uniformly to creation, login, and
 * update. Responses never include the password hash.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::identity::Role;
use crate::users::model::User;
use crate::validation::{Field, Rule, Schema, ValidatedBody};

/// Registration request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,
    /// Email address, unique across accounts
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

static CREATE_USER_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("name", Rule::string(3, 255)),
        Field::required("email", Rule::email(5, 255)),
        Field::required("password", Rule::string(5, 255)),
    ],
    with: &[],
};

impl ValidatedBody for CreateUserRequest {
    fn schema() -> &'static Schema {
        &CREATE_USER_SCHEMA
    }
}

/// Profile update request.
///
/// `password` and `newPassword` travel together: supplying the current
/// password schema-requires the new one, while a new password without the
/// current one is rejected by the handler as a credential failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Current password, verified against the stored hash
    pub password: Option<String>,
    /// Replacement password
    pub new_password: Option<String>,
}

static UPDATE_USER_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("name", Rule::string(3, 255)),
        Field::required("email", Rule::email(5, 255)),
        Field::optional("password", Rule::string(5, 255)),
        Field::optional("newPassword", Rule::string(5, 255)),
    ],
    with: &[("password", "newPassword")],
};

impl ValidatedBody for UpdateUserRequest {
    fn schema() -> &'static Schema {
        &UPDATE_USER_SCHEMA
    }
}

/// Public user shape returned by registration, update, and delete
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// User shape with role, returned by the profile and admin reads
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    /// User id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Privilege level
    pub role: Role,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_schema_bounds() {
        let check = |body| CreateUserRequest::schema().check(&body);

        assert!(check(json!({
            "name": "Ann", "email": "a@x.com", "password": "secret"
        }))
        .is_ok());

        // Name below the minimum of 3.
        assert!(check(json!({
            "name": "An", "email": "a@x.com", "password": "secret"
        }))
        .is_err());

        // Password below the storage bound of 5.
        assert!(check(json!({
            "name": "Ann", "email": "a@x.com", "password": "1234"
        }))
        .is_err());

        assert!(check(json!({
            "name": "Ann", "email": "not-an-email", "password": "secret"
        }))
        .is_err());
    }

    #[test]
    fn test_update_schema_password_pairing() {
        let check = |body| UpdateUserRequest::schema().check(&body);

        // Current password without a new one is a schema error.
        let err = check(json!({
            "name": "Ann", "email": "a@x.com", "password": "secret"
        }))
        .unwrap_err();
        assert_eq!(err.field, "newPassword");

        // A new password without the current one passes the schema;
        // the handler rejects it as a credential failure instead.
        assert!(check(json!({
            "name": "Ann", "email": "a@x.com", "newPassword": "secret2"
        }))
        .is_ok());
    }
}
