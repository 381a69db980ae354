//! Validation Module
//!
//! Declarative request-body validation. Each mutating endpoint owns a
//! [`schema::Schema`]: a plain, constant description of its payload's
//! fields and bounds, interpreted by one generic checking routine. Schemas
//! are constructed once and never mutated by incoming data.
//!
//! The [`extract::Validated`] extractor runs the schema against the raw
//! JSON body before deserializing into the typed request struct, so a
//! validation failure short-circuits with field-level detail and no side
//! effects - handlers only ever see payloads that already passed.

/// Schema data structures and the generic checking routine
pub mod schema;

/// Body extractor that validates before deserializing
pub mod extract;

pub use extract::{parse_resource_id, Validated, ValidatedBody};
pub use schema::{Field, Rule, Schema, ValidationError};
