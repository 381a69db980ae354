/**
 * Label Model and Database Operations
 *
 * Single-label lookups filter on `(id, user_id)` together: a foreign
 * label produces the same `None` as a missing one, so callers never
 * reveal labels belonging to other users.
 */

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;

/// Label record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Label {
    /// Unique label ID
    pub id: Uuid,
    /// Owning user, immutable after creation
    pub user_id: Uuid,
    /// Label name
    pub name: String,
}

/// Create a label for a user
pub async fn create_label(
    pool: &SqlitePool,
    user_id: Uuid,
    name: &str,
) -> Result<Label, ApiError> {
    let label = sqlx::query_as::<_, Label>(
        "INSERT INTO labels (id, user_id, name) VALUES (?, ?, ?) RETURNING id, user_id, name",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(label)
}

/// List a user's labels
pub async fn list_labels(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Label>, ApiError> {
    let labels = sqlx::query_as::<_, Label>(
        "SELECT id, user_id, name FROM labels WHERE user_id = ? ORDER BY name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(labels)
}

/// Fetch one label, scoped by owner
pub async fn find_label(
    pool: &SqlitePool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<Label>, ApiError> {
    let label = sqlx::query_as::<_, Label>(
        "SELECT id, user_id, name FROM labels WHERE id = ? AND user_id = ?",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(label)
}

/// Rename one label, scoped by owner
pub async fn update_label(
    pool: &SqlitePool,
    user_id: Uuid,
    id: Uuid,
    name: &str,
) -> Result<Option<Label>, ApiError> {
    let label = sqlx::query_as::<_, Label>(
        "UPDATE labels SET name = ? WHERE id = ? AND user_id = ? RETURNING id, user_id, name",
    )
    .bind(name)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(label)
}

/// Delete one label, scoped by owner, returning the removed record
pub async fn delete_label(
    pool: &SqlitePool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<Label>, ApiError> {
    let label = sqlx::query_as::<_, Label>(
        "DELETE FROM labels WHERE id = ? AND user_id = ? RETURNING id, user_id, name",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(label)
}
