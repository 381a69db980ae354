/**
 * Router Configuration
 *
 * Mounts the API route table under /api, adds the 404 fallback and the
 * request-tracing layer, and binds the application state.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api = configure_api_routes(state.clone());

    Router::new()
        .nest("/api", api)
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found.") })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
