/**
 * Label Request/Response Types
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::labels::model::Label;
use crate::validation::{Field, Rule, Schema, ValidatedBody};

/// Label create/update body
#[derive(Debug, Deserialize)]
pub struct LabelBody {
    /// Label name
    pub name: String,
}

static LABEL_SCHEMA: Schema = Schema {
    fields: &[Field::required("name", Rule::string(1, 255))],
    with: &[],
};

impl ValidatedBody for LabelBody {
    fn schema() -> &'static Schema {
        &LABEL_SCHEMA
    }
}

/// Label shape returned to clients
#[derive(Debug, Serialize)]
pub struct LabelResponse {
    /// Label id
    pub id: Uuid,
    /// Label name
    pub name: String,
}

impl From<Label> for LabelResponse {
    fn from(label: Label) -> Self {
        Self {
            id: label.id,
            name: label.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_bounds() {
        let check = |body| LabelBody::schema().check(&body);

        assert!(check(json!({ "name": "" })).is_err());
        assert!(check(json!({ "name": "work" })).is_ok());
        assert!(check(json!({ "name": "a".repeat(255) })).is_ok());
        assert!(check(json!({ "name": "a".repeat(256) })).is_err());
        assert!(check(json!({})).is_err());
    }
}
