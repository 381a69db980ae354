/**
 * Ownership Policy
 *
 * Two policies decide whether a caller may act on a record:
 *
 * - **Hiding** (notes, labels): persistence lookups are scoped by
 *   `(id, user_id)`, so a foreign resource is indistinguishable from a
 *   missing one and reported as 404. The existence of another user's
 *   resource is never revealed. This lives in the model queries, not here.
 *
 * - **Revealing** (`PUT`/`DELETE /users/:id`): the path id is supplied by
 *   the caller, not discovered, so a mismatch with the authenticated id is
 *   reported as 403 outright. That check is `ensure_self` below. The role
 *   does not bypass it: admins edit their own account like everyone else.
 */

use uuid::Uuid;

use crate::auth::identity::Identity;
use crate::error::ApiError;

/// Require that a caller-supplied user id is the caller's own.
///
/// # Errors
///
/// `ApiError::Forbidden` ("Not authorized.") when the ids differ.
pub fn ensure_self(identity: &Identity, path_id: Uuid) -> Result<(), ApiError> {
    if identity.id != path_id {
        tracing::warn!(
            "user {} attempted to modify account {}",
            identity.id,
            path_id
        );
        return Err(ApiError::Forbidden {
            message: "Not authorized.".to_string(),
        });
    }
    Ok(())
}
