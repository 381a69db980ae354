/**
 * User Model and Database Operations
 *
 * The user record and its SQLite operations. Registration always creates
 * regular accounts; the admin role is assigned out of band.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::identity::Role;
use crate::error::ApiError;

/// User record as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Privilege level
    pub role: Role,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

const USER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

/// Create a new regular user
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, ApiError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(Role::User)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get a user by email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, ApiError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user by ID
pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, ApiError> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// List every user record
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<User>, ApiError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Update a user's profile.
///
/// The hash is replaced only when a new one is supplied; `None` keeps the
/// stored credential.
pub async fn update_profile(
    pool: &SqlitePool,
    id: Uuid,
    name: &str,
    email: &str,
    password_hash: Option<&str>,
) -> Result<Option<User>, ApiError> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE users \
         SET name = ?, email = ?, password_hash = COALESCE(?, password_hash), updated_at = ? \
         WHERE id = ? \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Delete a user, returning the removed record
pub async fn delete_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, ApiError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "DELETE FROM users WHERE id = ? RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
