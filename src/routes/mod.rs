//! Route Configuration Module
//!
//! Assembles the application router.
//!
//! - **`router`** - top-level router: API mount point, fallback, tracing
//! - **`api_routes`** - the /api route table with its guard layering

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
