//! Users Module
//!
//! User accounts: registration, profile reads, self-service update and
//! delete, and the admin-only listing.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - User record and database operations
//! ├── types.rs    - Request/response types and schemas
//! └── handlers.rs - HTTP handlers
//! ```

/// User record and database operations
pub mod model;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use model::User;
pub use types::{CreateUserRequest, UpdateUserRequest, UserProfileResponse, UserResponse};
