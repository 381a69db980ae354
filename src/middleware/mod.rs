//! Middleware Module
//!
//! Request gates that run before handler logic:
//!
//! - **`auth`** - the authentication guard: verifies the credential header
//!   and attaches the decoded [`crate::auth::Identity`] to the request
//! - **`admin`** - the role guard: requires an admin identity; must be
//!   layered after the authentication guard

pub mod admin;
pub mod auth;

pub use admin::require_admin;
pub use auth::{require_auth, AuthUser};
