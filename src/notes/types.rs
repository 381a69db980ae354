/**
 * Note Request/Response Types
 *
 * One body shape serves both creation and update, like the original API:
 * the title is always required, everything else is optional. Responses
 * never include the owner column.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::notes::model::Note;
use crate::validation::{Field, Rule, Schema, ValidatedBody};

/// One checklist entry on a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Entry text
    pub name: String,
    /// Whether the entry is checked off
    #[serde(default)]
    pub ticked: bool,
}

/// Note create/update body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteBody {
    /// Note title
    pub title: String,
    /// Archive flag; ignored on creation, new notes start active
    pub archived: Option<bool>,
    /// Pin flag
    pub pinned: Option<bool>,
    /// Display color
    pub color: Option<String>,
    /// Free-form body text
    pub text: Option<String>,
    /// Referenced label ids
    pub label_ids: Option<Vec<Uuid>>,
    /// Checklist entries
    pub ticks: Option<Vec<Tick>>,
}

static NOTE_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("title", Rule::string(1, 255)),
        Field::optional("archived", Rule::Bool),
        Field::optional("pinned", Rule::Bool),
        Field::optional("color", Rule::string(1, 24)),
        Field::optional("text", Rule::string(1, 4192)),
        Field::optional("labelIds", Rule::Array(&Rule::Id)),
        Field::optional(
            "ticks",
            Rule::Array(&Rule::Object(&[
                Field::required("name", Rule::string(1, 4192)),
                Field::optional("ticked", Rule::Bool),
            ])),
        ),
    ],
    with: &[],
};

impl ValidatedBody for NoteBody {
    fn schema() -> &'static Schema {
        &NOTE_SCHEMA
    }
}

/// Note shape returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note id
    pub id: Uuid,
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

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            archived: note.archived,
            pinned: note.pinned,
            color: note.color,
            text: note.text,
            label_ids: note.label_ids,
            ticks: note.ticks,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Body of the bulk delete response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCountResponse {
    /// How many notes were removed
    pub deleted_count: u64,
}
