//! Notes Module
//!
//! Owner-scoped notes with archiving, pinning, colors, label references,
//! and checklist ticks.
//!
//! Every query is scoped by the authenticated owner: a note belonging to
//! another user is indistinguishable from a missing one and reported 404.
//!
//! # Module Structure
//!
//! ```text
//! notes/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - Note record and owner-scoped database operations
//! ├── types.rs    - Request/response types and schema
//! └── handlers.rs - HTTP handlers
//! ```

/// Note record and database operations
pub mod model;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use model::Note;
pub use types::{NoteBody, NoteResponse, Tick};
