/**
 * Validation Schemas
 *
 * A `Schema` is plain data: a list of field rules plus co-presence pairs,
 * checked against a raw JSON object by `Schema::check`. No macros, no
 * dynamic registration - endpoints declare their schema as a `static` and
 * the one generic routine below interprets it.
 *
 * # Rules
 *
 * - `Str` - string with length bounds (counted in characters) and an
 *   optional email-shape requirement
 * - `Bool` - boolean
 * - `Id` - opaque identifier string (UUID shape)
 * - `Array` - homogeneous array of an item rule
 * - `Object` - nested object with its own field list
 *
 * Unknown fields are rejected. `null` is treated the same as absent.
 */

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{field}\" {message}")]
pub struct ValidationError {
    /// The offending field, dotted/indexed for nested values
    pub field: String,
    /// What the field failed to satisfy
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Constraint applied to a single JSON value.
#[derive(Debug)]
pub enum Rule {
    /// String with length bounds and optional email shape
    Str {
        /// Minimum length, in characters
        min: usize,
        /// Maximum length, in characters
        max: usize,
        /// Require an email shape on top of the bounds
        email: bool,
    },
    /// Boolean
    Bool,
    /// Opaque identifier (UUID string)
    Id,
    /// Array of items satisfying the inner rule
    Array(&'static Rule),
    /// Nested object with its own fields
    Object(&'static [Field]),
}

impl Rule {
    /// String rule with length bounds
    pub const fn string(min: usize, max: usize) -> Self {
        Self::Str {
            min,
            max,
            email: false,
        }
    }

    /// Email rule with length bounds
    pub const fn email(min: usize, max: usize) -> Self {
        Self::Str {
            min,
            max,
            email: true,
        }
    }
}

/// One named field and its constraint.
#[derive(Debug)]
pub struct Field {
    /// JSON field name
    pub name: &'static str,
    /// Whether absence (or `null`) is an error
    pub required: bool,
    /// The constraint on the value when present
    pub rule: Rule,
}

impl Field {
    /// A required field
    pub const fn required(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            required: true,
            rule,
        }
    }

    /// An optional field
    pub const fn optional(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            required: false,
            rule,
        }
    }
}

/// A request payload description: fields plus co-presence constraints.
#[derive(Debug)]
pub struct Schema {
    /// The allowed fields; anything else in the payload is rejected
    pub fields: &'static [Field],
    /// Pairs `(present, then_required)`: when the first field is present
    /// the second must be too
    pub with: &'static [(&'static str, &'static str)],
}

impl Schema {
    /// Check a raw JSON value against this schema.
    ///
    /// Pure: no side effects, the value is never mutated.
    ///
    /// # Errors
    ///
    /// The first violation found, with field-level detail.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        let Some(object) = value.as_object() else {
            return Err(ValidationError::new("body", "must be an object"));
        };

        for key in object.keys() {
            if !self.fields.iter().any(|f| f.name == key) {
                return Err(ValidationError::new(key.clone(), "is not allowed"));
            }
        }

        for field in self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(ValidationError::new(field.name, "is required"));
                    }
                }
                Some(value) => check_rule(field.name, &field.rule, value)?,
            }
        }

        for (present, then_required) in self.with {
            let has = |name: &str| object.get(name).is_some_and(|v| !v.is_null());
            if has(present) && !has(then_required) {
                return Err(ValidationError::new(*then_required, "is required"));
            }
        }

        Ok(())
    }
}

fn check_rule(name: &str, rule: &Rule, value: &Value) -> Result<(), ValidationError> {
    match rule {
        Rule::Str { min, max, email } => {
            let Some(s) = value.as_str() else {
                return Err(ValidationError::new(name, "must be a string"));
            };
            let len = s.chars().count();
            if len < *min {
                return Err(ValidationError::new(
                    name,
                    format!("must be at least {min} characters"),
                ));
            }
            if len > *max {
                return Err(ValidationError::new(
                    name,
                    format!("must be at most {max} characters"),
                ));
            }
            if *email && !is_email(s) {
                return Err(ValidationError::new(name, "must be a valid email"));
            }
            Ok(())
        }
        Rule::Bool => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(ValidationError::new(name, "must be a boolean"))
            }
        }
        Rule::Id => {
            let valid = value.as_str().is_some_and(|s| Uuid::parse_str(s).is_ok());
            if valid {
                Ok(())
            } else {
                Err(ValidationError::new(name, "must be a valid identifier"))
            }
        }
        Rule::Array(item) => {
            let Some(items) = value.as_array() else {
                return Err(ValidationError::new(name, "must be an array"));
            };
            for (index, value) in items.iter().enumerate() {
                check_rule(&format!("{name}[{index}]"), item, value)?;
            }
            Ok(())
        }
        Rule::Object(fields) => {
            let nested = Schema { fields, with: &[] };
            nested.check(value).map_err(|err| {
                ValidationError::new(format!("{name}.{}", err.field), err.message)
            })
        }
    }
}

/// Minimal email shape check: one `@`, non-empty local part, dotted domain.
fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
