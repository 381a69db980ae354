//! Server Module
//!
//! Server initialization and process-wide state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Environment configuration, loaded once at startup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Database pool, migrations, app assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. Configuration is read from the environment once; a missing
//!    `JWT_SECRET` aborts startup.
//! 2. The SQLite pool is created and migrations run.
//! 3. `AppState` (pool + token codec) is built and the router assembled.
//!
//! After startup the shared state is read-only: the pool is internally
//! synchronized and the codec immutable, so no locking is needed.

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
