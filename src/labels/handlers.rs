/**
 * Label Handlers
 *
 * HTTP handlers for the /api/labels routes. All routes sit behind the
 * authentication guard and every lookup is owner-scoped: a label id
 * belonging to another user yields 404, never 403.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::labels::model;
use crate::labels::types::{LabelBody, LabelResponse};
use crate::middleware::auth::AuthUser;
use crate::validation::{parse_resource_id, Validated};

/// List the caller's labels
pub async fn list_labels(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
) -> Result<Json<Vec<LabelResponse>>, ApiError> {
    let labels = model::list_labels(&pool, identity.id).await?;

    Ok(Json(labels.into_iter().map(LabelResponse::from).collect()))
}

/// Fetch one of the caller's labels
///
/// # Errors
///
/// * `404` - malformed id, missing label, or a label owned by someone else
pub async fn get_label(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<LabelResponse>, ApiError> {
    let id = parse_resource_id(&id, "Label")?;

    let label = model::find_label(&pool, identity.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Label"))?;

    Ok(Json(LabelResponse::from(label)))
}

/// Create a label owned by the caller
pub async fn create_label(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Validated(body): Validated<LabelBody>,
) -> Result<Json<LabelResponse>, ApiError> {
    let label = model::create_label(&pool, identity.id, &body.name).await?;

    tracing::info!("label created: {} for user {}", label.id, identity.id);
    Ok(Json(LabelResponse::from(label)))
}

/// Rename one of the caller's labels
///
/// # Errors
///
/// * `400` - schema failure
/// * `404` - malformed id, missing label, or a label owned by someone else
pub async fn update_label(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
    Validated(body): Validated<LabelBody>,
) -> Result<Json<LabelResponse>, ApiError> {
    let id = parse_resource_id(&id, "Label")?;

    let label = model::update_label(&pool, identity.id, id, &body.name)
        .await?
        .ok_or_else(|| ApiError::not_found("Label"))?;

    Ok(Json(LabelResponse::from(label)))
}

/// Delete one of the caller's labels, returning it
///
/// # Errors
///
/// * `404` - malformed id, missing label, or a label owned by someone else
pub async fn delete_label(
    State(pool): State<SqlitePool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<LabelResponse>, ApiError> {
    let id = parse_resource_id(&id, "Label")?;

    let label = model::delete_label(&pool, identity.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Label"))?;

    Ok(Json(LabelResponse::from(label)))
}
