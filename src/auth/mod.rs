//! Authentication Module
//!
//! This module holds the identity model, the JWT token codec, the ownership
//! policy helpers, and the login handler.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── identity.rs  - Identity and Role types
//! ├── tokens.rs    - JWT token codec (issue/verify)
//! ├── policy.rs    - Ownership policy for caller-supplied user ids
//! └── login.rs     - POST /api/login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Registration**: user record created, token issued and returned in a
//!    response header.
//! 2. **Login**: email + password verified against the stored bcrypt hash,
//!    fresh token returned in the body.
//! 3. **Authenticated request**: the auth guard verifies the token and
//!    attaches the decoded [`identity::Identity`] to the request.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned.
//! - Tokens are stateless HS256 JWTs signed with a process-wide secret
//!   loaded once at startup.
//! - Login failures use one message for unknown email and wrong password.

/// Identity and role types
pub mod identity;

/// JWT token issuance and verification
pub mod tokens;

/// Ownership policy for caller-supplied identifiers
pub mod policy;

/// Login handler
pub mod login;

pub use identity::{Identity, Role};
pub use tokens::{TokenCodec, TokenError};
