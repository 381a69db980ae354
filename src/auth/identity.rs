/**
 * Identity Model
 *
 * The authenticated caller's id and role, reconstructed from a verified
 * token on every request. Request-local: constructed by the auth guard,
 * dropped at the end of the request. There is no session store.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Privilege level carried inside the token and stored on the user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    /// Regular account, owner-scoped access only
    User,
    /// Elevated account, passes the role guard
    Admin,
}

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// User record id, matches `users.id`
    pub id: Uuid,
    /// Privilege level
    pub role: Role,
}

impl Identity {
    /// Whether this identity passes the role guard
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
