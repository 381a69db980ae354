//! Labels Module
//!
//! Owner-scoped labels that notes can reference. Same hiding policy as
//! notes: a label belonging to another user is reported 404.
//!
//! # Module Structure
//!
//! ```text
//! labels/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - Label record and owner-scoped database operations
//! ├── types.rs    - Request/response types and schema
//! └── handlers.rs - HTTP handlers
//! ```

/// Label record and database operations
pub mod model;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use model::Label;
pub use types::{LabelBody, LabelResponse};
