/**
 * Note Handlers
 *
 * HTTP handlers for the /api/notes routes. All routes sit behind the
 * authentication guard; every persistence call is scoped to the
 * authenticated owner, so a foreign note id yields 404.
 *
 * # Routes
 *
 * - `GET /api/notes` - all of the caller's notes
 * - `GET /api/notes/archive` - the caller's archived notes
 * - `GET /api/notes/{id}` - one note
 * - `POST /api/notes` - create
 * - `PUT /api/notes/{id}` - update
 * - `DELETE /api/notes/{id}` - delete one, returning it
 * - `DELETE /api/notes` - delete all, returning the count
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::notes::model;
use crate::notes::types::{DeleteCountResponse, NoteBody, NoteResponse};
use crate::validation::{parse_resource_id, Validated};

/// List the caller's notes
pub async fn list_notes(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = model::list_notes(&pool, identity.id).await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// List the caller's archived notes
pub async fn list_archived(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = model::list_archived(&pool, identity.id).await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// Fetch one of the caller's notes
///
/// # Errors
///
/// * `404` - malformed id, missing note, or a note owned by someone else
pub async fn get_note(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let id = parse_resource_id(&id, "Note")?;

    let note = model::find_note(&pool, identity.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Note"))?;

    Ok(Json(NoteResponse::from(note)))
}

/// Create a note owned by the caller
pub async fn create_note(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Validated(body): Validated<NoteBody>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = model::create_note(&pool, identity.id, &body).await?;

    tracing::info!("note created: {} for user {}", note.id, identity.id);
    Ok(Json(NoteResponse::from(note)))
}

/// Update one of the caller's notes
///
/// # Errors
///
/// * `400` - schema failure
/// * `404` - malformed id, missing note, or a note owned by someone else
pub async fn update_note(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
    Validated(body): Validated<NoteBody>,
) -> Result<Json<NoteResponse>, ApiError> {
    let id = parse_resource_id(&id, "Note")?;

    let note = model::update_note(&pool, identity.id, id, &body)
        .await?
        .ok_or_else(|| ApiError::not_found("Note"))?;

    Ok(Json(NoteResponse::from(note)))
}

/// Delete one of the caller's notes, returning it
///
/// # Errors
///
/// * `404` - malformed id, missing note, or a note owned by someone else
pub async fn delete_note(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let id = parse_resource_id(&id, "Note")?;

    let note = model::delete_note(&pool, identity.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Note"))?;

    Ok(Json(NoteResponse::from(note)))
}

/// Delete every note the caller owns, returning the count
///
/// # Errors
///
/// * `404` - the caller has no notes
pub async fn delete_all_notes(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
) -> Result<Json<DeleteCountResponse>, ApiError> {
    let deleted_count = model::delete_all(&pool, identity.id).await?;
    if deleted_count == 0 {
        return Err(ApiError::not_found("Notes"));
    }

    tracing::info!("deleted {} notes for user {}", deleted_count, identity.id);
    Ok(Json(DeleteCountResponse { deleted_count }))
}
