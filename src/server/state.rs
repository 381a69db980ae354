/**
 * Application State
 *
 * `AppState` is the central state container: the database pool and the
 * token codec. Both are immutable after startup - the pool synchronizes
 * internally and the codec is read-only - so the state is shared across
 * request handlers without any locking.
 *
 * `FromRef` implementations let handlers extract just the part they need
 * (`State<SqlitePool>` for persistence-only handlers) instead of the whole
 * container.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::tokens::TokenCodec;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Token codec, keys derived once from the configured secret
    pub tokens: Arc<TokenCodec>,
}

impl AppState {
    /// Build state from an initialized pool and codec
    pub fn new(pool: SqlitePool, tokens: TokenCodec) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
