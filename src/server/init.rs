/**
 * Server Initialization
 *
 * Creates the database pool, runs migrations, and assembles the
 * application router from configuration.
 */

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;

use crate::auth::tokens::TokenCodec;
use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Initialization error
#[derive(Debug, Error)]
pub enum InitError {
    /// Pool creation or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create the database pool and bring the schema up to date.
///
/// In-memory databases are pinned to a single connection: each SQLite
/// `:memory:` connection is otherwise its own separate database.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, InitError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Create the application router from configuration.
///
/// Connects the database, runs migrations, builds the token codec from the
/// configured secret, and assembles all routes.
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    let pool = connect_database(&config.database_url).await?;
    let tokens = TokenCodec::new(&config.jwt_secret, config.token_ttl_secs);
    let state = AppState::new(pool, tokens);

    Ok(create_router(state))
}
