/**
 * Note Model and Database Operations
 *
 * Every operation below is scoped by the owning user id. Single-note
 * lookups filter on `(id, user_id)` together, so a note belonging to a
 * different user produces the same `None` as a note that does not exist -
 * callers report both as 404 and never reveal foreign resources.
 *
 * Label references and checklist ticks are stored as JSON text columns.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::notes::types::{NoteBody, Tick};

/// Note record
#[derive(Debug, Clone)]
pub struct Note {
    /// Unique note ID
    pub id: Uuid,
    /// Owning user, immutable after creation
    pub user_id: Uuid,
    /// Note title
    pub title: String,
    /// Archive flag
    pub archived: bool,
    /// Pin flag
    pub pinned: bool,
    /// Display color
    pub color: String,
    /// Free-form body text
    pub text: Option<String>,
    /// Referenced label ids
    pub label_ids: Vec<Uuid>,
    /// Checklist entries
    pub ticks: Vec<Tick>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Raw row with the JSON columns still serialized
#[derive(sqlx::FromRow)]
struct NoteRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    archived: bool,
    pinned: bool,
    color: String,
    text: Option<String>,
    label_ids: String,
    ticks: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self) -> Result<Note, ApiError> {
        Ok(Note {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            archived: self.archived,
            pinned: self.pinned,
            color: self.color,
            text: self.text,
            label_ids: serde_json::from_str(&self.label_ids)?,
            ticks: serde_json::from_str(&self.ticks)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const NOTE_COLUMNS: &str =
    "id, user_id, title, archived, pinned, color, text, label_ids, ticks, created_at, updated_at";

/// Create a note for a user.
///
/// New notes always start unarchived; the body's archive flag only applies
/// on update.
pub async fn create_note(
    pool: &SqlitePool,
    user_id: Uuid,
    body: &NoteBody,
) -> Result<Note, ApiError> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let label_ids = serde_json::to_string(body.label_ids.as_deref().unwrap_or_default())?;
    let ticks = serde_json::to_string(body.ticks.as_deref().unwrap_or_default())?;

    let row = sqlx::query_as::<_, NoteRow>(&format!(
        "INSERT INTO notes (id, user_id, title, archived, pinned, color, text, label_ids, ticks, created_at, updated_at) \
         VALUES (?, ?, ?, 0, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {NOTE_COLUMNS}"
    ))
    .bind(id)
    .bind(user_id)
    .bind(&body.title)
    .bind(body.pinned.unwrap_or(false))
    .bind(body.color.as_deref().unwrap_or("default"))
    .bind(&body.text)
    .bind(&label_ids)
    .bind(&ticks)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    row.into_note()
}

/// List a user's notes
pub async fn list_notes(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Note>, ApiError> {
    let rows = sqlx::query_as::<_, NoteRow>(&format!(
        "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = ? ORDER BY created_at"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(NoteRow::into_note).collect()
}

/// List a user's archived notes
pub async fn list_archived(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Note>, ApiError> {
    let rows = sqlx::query_as::<_, NoteRow>(&format!(
        "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = ? AND archived = 1 ORDER BY created_at"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(NoteRow::into_note).collect()
}

/// Fetch one note, scoped by owner
pub async fn find_note(
    pool: &SqlitePool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<Note>, ApiError> {
    let row = sqlx::query_as::<_, NoteRow>(&format!(
        "SELECT {NOTE_COLUMNS} FROM notes WHERE id = ? AND user_id = ?"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(NoteRow::into_note).transpose()
}

/// Update one note, scoped by owner.
///
/// Absent optional fields keep their stored values.
pub async fn update_note(
    pool: &SqlitePool,
    user_id: Uuid,
    id: Uuid,
    body: &NoteBody,
) -> Result<Option<Note>, ApiError> {
    let now = Utc::now();
    let label_ids = body
        .label_ids
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;
    let ticks = body.ticks.as_ref().map(serde_json::to_string).transpose()?;

    let row = sqlx::query_as::<_, NoteRow>(&format!(
        "UPDATE notes \
         SET title = ?, \
             archived = COALESCE(?, archived), \
             pinned = COALESCE(?, pinned), \
             color = COALESCE(?, color), \
             text = COALESCE(?, text), \
             label_ids = COALESCE(?, label_ids), \
             ticks = COALESCE(?, ticks), \
             updated_at = ? \
         WHERE id = ? AND user_id = ? \
         RETURNING {NOTE_COLUMNS}"
    ))
    .bind(&body.title)
    .bind(body.archived)
    .bind(body.pinned)
    .bind(&body.color)
    .bind(&body.text)
    .bind(&label_ids)
    .bind(&ticks)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(NoteRow::into_note).transpose()
}

/// Delete one note, scoped by owner, returning the removed record
pub async fn delete_note(
    pool: &SqlitePool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<Note>, ApiError> {
    let row = sqlx::query_as::<_, NoteRow>(&format!(
        "DELETE FROM notes WHERE id = ? AND user_id = ? RETURNING {NOTE_COLUMNS}"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(NoteRow::into_note).transpose()
}

/// Delete every note owned by a user, returning how many were removed
pub async fn delete_all(pool: &SqlitePool, user_id: Uuid) -> Result<u64, ApiError> {
    let result = sqlx::query("DELETE FROM notes WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
