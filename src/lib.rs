//! Notekeeper - Main Library
//!
//! Notekeeper is a multi-tenant notes-and-labels REST API built on Axum.
//! Users register and log in, then manage personal notes (with archiving,
//! pinning, colors, and checklist ticks) and labels. Every resource is
//! owner-scoped: a note or label is visible and mutable only to the user
//! that created it, with a small role-based exemption for administrators.
//!
//! # Module Structure
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Identity, JWT token codec, ownership policy, login handler
//! - **`middleware`** - Authentication and role guards
//! - **`validation`** - Declarative request-body schemas and the `Validated` extractor
//! - **`users`** - User accounts: model, handlers, request/response types
//! - **`notes`** - Notes: model, handlers, request/response types
//! - **`labels`** - Labels: model, handlers, request/response types
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Request Pipeline
//!
//! Every request runs one linear pipeline: auth guard (token verification,
//! identity attached to request extensions) → optional role guard →
//! optional body validation → handler → owner-scoped persistence call.
//! No request-handling state is shared mutably across requests; the only
//! process-wide state is the immutable configuration and the database pool.

pub mod auth;
pub mod error;
pub mod labels;
pub mod middleware;
pub mod notes;
pub mod routes;
pub mod server;
pub mod users;
pub mod validation;
